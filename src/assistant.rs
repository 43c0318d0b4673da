use reqwest::Client;
use serde_json::{json, Value};
use std::env;

const BASE_PROMPT: &str = "You are the in-app wellness assistant for a health tracking application. \
The user has completed a body scan that assigns a 0-100 load to health areas and a 0-100 coherence score, \
and logs daily mood, energy and sleep check-ins. \
Answer briefly and practically, in plain language. \
You are not a doctor and must not diagnose; suggest seeing a professional for anything serious.";

struct RouteContext {
    prefix: &'static str,
    instruction: &'static str,
}

// Route-keyed context table. The active client route is matched by prefix and
// the instruction appended to the base prompt.
const ROUTE_CONTEXTS: &[RouteContext] = &[
    RouteContext {
        prefix: "/history",
        instruction: "The user is currently viewing their check-in history. \
Focus on patterns over time in mood, energy and sleep rather than single days.",
    },
    RouteContext {
        prefix: "/issue/",
        instruction: "The user is currently viewing the detail page of a specific health issue. \
Relate your answer to understanding and addressing one issue at a time.",
    },
    RouteContext {
        prefix: "/health-system/",
        instruction: "The user is currently viewing a health system category. \
Explain how findings in this system relate to each other and to overall wellness.",
    },
];

/// Assembles the system prompt for a chat request from the static route table.
/// Unknown or absent routes get the base prompt only.
pub fn system_prompt_for_route(route: Option<&str>) -> String {
    let mut prompt = BASE_PROMPT.to_string();
    if let Some(route) = route {
        if let Some(ctx) = ROUTE_CONTEXTS.iter().find(|c| route.starts_with(c.prefix)) {
            prompt.push_str("\n\n");
            prompt.push_str(ctx.instruction);
        }
    }
    prompt
}

fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

pub struct AssistantClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AssistantClient {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// One stateless completion round-trip. Errors are stringly typed; the
    /// chat handler maps any failure to a 500 with a JSON error body.
    pub async fn generate_reply(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<String, String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = json!({
            "system_instruction": {
                "parts": [{ "text": system_prompt }]
            },
            "contents": [{
                "parts": [{ "text": message }]
            }]
        });

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Generate Request Failed: {}", e))?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(format!("Generate Failed: {}", text));
        }

        let json: Value = res.json().await.map_err(|e| e.to_string())?;

        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or("No text in completion response")?;

        Ok(strip_code_fences(text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_prompt_for_unknown_route() {
        assert_eq!(system_prompt_for_route(None), BASE_PROMPT);
        assert_eq!(system_prompt_for_route(Some("/checkin")), BASE_PROMPT);
    }

    #[test]
    fn history_route_gets_history_context() {
        let prompt = system_prompt_for_route(Some("/history"));
        assert!(prompt.starts_with(BASE_PROMPT));
        assert!(prompt.contains("check-in history"));
    }

    #[test]
    fn issue_and_system_routes_match_by_prefix() {
        assert!(system_prompt_for_route(Some("/issue/42")).contains("one issue at a time"));
        assert!(
            system_prompt_for_route(Some("/health-system/hormones"))
                .contains("health system category")
        );
    }

    #[test]
    fn fence_stripping() {
        assert_eq!(strip_code_fences("```json\nhi\n```"), "hi");
        assert_eq!(strip_code_fences("plain"), "plain");
    }
}

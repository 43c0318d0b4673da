use crate::entities::health_issue;

use super::grouping::{HIGH_LOAD_THRESHOLD, MODERATE_LOAD_THRESHOLD};

/// Produces the short natural-language insight strings shown on the insights
/// view. This is a decision table over the top issue's load and the band
/// counts, not a generalizable algorithm. Returns an empty list when no rule
/// fires; the caller renders a placeholder in that case.
pub fn summarize(issues: &[health_issue::Model]) -> Vec<String> {
    let mut insights = Vec::new();

    let top = match issues.iter().max_by_key(|i| i.load) {
        Some(top) => top,
        None => return insights,
    };

    let high_count = issues
        .iter()
        .filter(|i| i.load >= HIGH_LOAD_THRESHOLD)
        .count();
    let moderate_count = issues
        .iter()
        .filter(|i| i.load >= MODERATE_LOAD_THRESHOLD && i.load < HIGH_LOAD_THRESHOLD)
        .count();

    if top.load >= 80 {
        insights.push(format!(
            "{} shows a very high load ({}%) and needs attention first.",
            top.name, top.load
        ));
    } else if top.load >= HIGH_LOAD_THRESHOLD {
        insights.push(format!(
            "{} currently carries the highest load ({}%).",
            top.name, top.load
        ));
    }

    if high_count >= 3 {
        insights.push(format!(
            "{} areas are in the high band at the same time. Address them one at a time rather than all at once.",
            high_count
        ));
    }

    if high_count == 0 && moderate_count > 0 {
        insights.push(format!(
            "Nothing is in the high band. Keep an eye on {} moderate finding{}.",
            moderate_count,
            if moderate_count == 1 { "" } else { "s" }
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: i32, name: &str, load: i32) -> health_issue::Model {
        health_issue::Model {
            id,
            name: name.to_string(),
            category: "general".to_string(),
            description: String::new(),
            load,
            recommendations: None,
            detailed_info: None,
            specific_advice: None,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn empty_issue_list_yields_no_insights() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn all_low_loads_yield_no_insights() {
        let issues = vec![issue(1, "Sleep", 10), issue(2, "Digestion", 25)];
        assert!(summarize(&issues).is_empty());
    }

    #[test]
    fn very_high_top_load_leads() {
        let issues = vec![issue(1, "Gut Flora", 85), issue(2, "Sleep", 40)];
        let insights = summarize(&issues);
        assert!(insights[0].contains("Gut Flora"));
        assert!(insights[0].contains("85"));
    }

    #[test]
    fn many_high_issues_adds_pacing_insight() {
        let issues = vec![
            issue(1, "a", 70),
            issue(2, "b", 65),
            issue(3, "c", 61),
            issue(4, "d", 10),
        ];
        let insights = summarize(&issues);
        assert!(insights.iter().any(|s| s.contains("3 areas")));
    }

    #[test]
    fn moderate_only_gets_watch_insight() {
        let issues = vec![issue(1, "Sleep", 45)];
        let insights = summarize(&issues);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("1 moderate finding"));
    }
}

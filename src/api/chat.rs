use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::assistant::{system_prompt_for_route, AssistantClient};
use crate::entities::chat_message;

#[derive(Deserialize)]
pub struct ChatContext {
    pub route: Option<String>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: Option<ChatContext>,
}

// POST /chat — persist the user message, complete against the assistant,
// persist the reply. Any failure maps to a 500 with {"error": ...}; the
// client owns retry.
pub async fn send_message(
    Extension(db): Extension<DatabaseConnection>,
    Extension(assistant): Extension<Arc<AssistantClient>>,
    Extension(user_id): Extension<i32>,
    Json(payload): Json<ChatRequest>,
) -> Response {
    if payload.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Message must not be empty"})),
        )
            .into_response();
    }

    crate::metrics::increment_chat_requests();

    let route = payload.context.as_ref().and_then(|c| c.route.clone());
    let now = chrono::Utc::now().naive_utc();

    let user_message = chat_message::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        message: Set(payload.message.clone()),
        is_user: Set(true),
        context: Set(route.clone()),
        created_at: Set(now),
    };
    if let Err(e) = user_message.insert(&db).await {
        error!("Failed to persist user message: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response();
    }

    let system_prompt = system_prompt_for_route(route.as_deref());
    let started = std::time::Instant::now();

    match assistant
        .generate_reply(&system_prompt, &payload.message)
        .await
    {
        Ok(reply) => {
            crate::metrics::record_assistant_latency(started.elapsed().as_secs_f64());

            let assistant_message = chat_message::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                message: Set(reply.clone()),
                is_user: Set(false),
                context: Set(route),
                created_at: Set(chrono::Utc::now().naive_utc()),
            };
            if let Err(e) = assistant_message.insert(&db).await {
                error!("Failed to persist assistant reply: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                )
                    .into_response();
            }

            tracing::Span::current()
                .record("table", "chat_messages")
                .record("action", "chat_reply")
                .record("user_id", user_id)
                .record("business_event", "Assistant replied");

            (StatusCode::OK, Json(json!({"message": reply}))).into_response()
        }
        Err(e) => {
            crate::metrics::increment_chat_failures();
            error!("Assistant request failed: {}", e);
            tracing::Span::current()
                .record("action", "chat_failed")
                .record("error", e.as_str());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e}))).into_response()
        }
    }
}

// GET /chat/history — oldest first, the order the conversation view renders.
pub async fn chat_history(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    match chat_message::Entity::find()
        .filter(chat_message::Column::UserId.eq(user_id))
        .order_by_asc(chat_message::Column::CreatedAt)
        .all(&db)
        .await
    {
        Ok(messages) => (StatusCode::OK, Json(messages)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

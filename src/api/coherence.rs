use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::analysis::severity::{classify_score, SeverityLabel};
use crate::entities::coherence_data;

// Shown when a user has no scan on record yet.
pub const DEFAULT_COHERENCE_SCORE: i32 = 65;

#[derive(serde::Deserialize)]
pub struct RecordScanRequest {
    scan_id: Option<Uuid>,
    score: i32,
    message: Option<String>,
}

// POST /coherence — store the outcome of a body scan.
pub async fn record_scan(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Json(payload): Json<RecordScanRequest>,
) -> Response {
    let classification = classify_score(payload.score);
    let message = payload.message.unwrap_or_else(|| {
        format!("Your coherence is in the {} range.", classification.label)
    });

    let row = coherence_data::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        scan_id: Set(payload.scan_id.unwrap_or_else(Uuid::new_v4)),
        score: Set(payload.score),
        message: Set(message),
        created_at: Set(chrono::Utc::now().naive_utc()),
    };

    match row.insert(&db).await {
        Ok(row) => {
            tracing::Span::current()
                .record("table", "coherence_data")
                .record("action", "record_scan")
                .record("user_id", user_id)
                .record("business_event", "Scan recorded");
            (StatusCode::CREATED, Json(row)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
pub struct CoherenceResponse {
    pub score: i32,
    pub message: String,
    pub classification: SeverityLabel,
    pub recorded_at: Option<chrono::NaiveDateTime>,
}

// GET /coherence/latest — most recent scan, or the default score when the
// user has never scanned.
pub async fn latest_score(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    match coherence_data::Entity::find()
        .filter(coherence_data::Column::UserId.eq(user_id))
        .order_by_desc(coherence_data::Column::CreatedAt)
        .one(&db)
        .await
    {
        Ok(Some(row)) => {
            let classification = classify_score(row.score);
            (
                StatusCode::OK,
                Json(CoherenceResponse {
                    score: row.score,
                    message: row.message,
                    classification,
                    recorded_at: Some(row.created_at),
                }),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::OK,
            Json(CoherenceResponse {
                score: DEFAULT_COHERENCE_SCORE,
                message: "No scan recorded yet.".to_string(),
                classification: classify_score(DEFAULT_COHERENCE_SCORE),
                recorded_at: None,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use crate::analysis::severity::{classify_score, SeverityLabel};
use crate::api::coherence::DEFAULT_COHERENCE_SCORE;
use crate::entities::{coherence_data, health_checkin, plan_recommendation};

const DASHBOARD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
pub struct DashboardResponse {
    pub health_score: i32,
    pub score_classification: SeverityLabel,
    pub latest_checkin: Option<health_checkin::Model>,
    pub pending_recommendations: Vec<plan_recommendation::Model>,
}

// GET /dashboard — the three reads are joined into one result and share one
// deadline. On timeout the joined future is dropped, which cancels the
// in-flight queries, so a late success can never overwrite the error.
pub async fn get_dashboard(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    let pending = plan_recommendation::Entity::find()
        .filter(plan_recommendation::Column::UserId.eq(user_id))
        .filter(plan_recommendation::Column::Completed.eq(false))
        .order_by_asc(plan_recommendation::Column::DueDate)
        .all(&db);

    let latest_checkin = health_checkin::Entity::find()
        .filter(health_checkin::Column::UserId.eq(user_id))
        .order_by_desc(health_checkin::Column::Date)
        .one(&db);

    let latest_scan = coherence_data::Entity::find()
        .filter(coherence_data::Column::UserId.eq(user_id))
        .order_by_desc(coherence_data::Column::CreatedAt)
        .one(&db);

    let joined = async { tokio::try_join!(pending, latest_checkin, latest_scan) };

    match tokio::time::timeout(DASHBOARD_TIMEOUT, joined).await {
        Ok(Ok((pending_recommendations, latest_checkin, latest_scan))) => {
            let health_score = latest_scan
                .map(|s| s.score)
                .unwrap_or(DEFAULT_COHERENCE_SCORE);
            (
                StatusCode::OK,
                Json(DashboardResponse {
                    health_score,
                    score_classification: classify_score(health_score),
                    latest_checkin,
                    pending_recommendations,
                }),
            )
                .into_response()
        }
        Ok(Err(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
        Err(_) => {
            tracing::Span::current()
                .record("action", "dashboard_timeout")
                .record("error", "timeout");
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({"error": "Dashboard data took too long to load. Try again."})),
            )
                .into_response()
        }
    }
}

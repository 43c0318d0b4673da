use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::entities::{plan_recommendation, user_plan, prelude::*};

// GET /plans
pub async fn list_plans(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    match UserPlan::find()
        .filter(user_plan::Column::UserId.eq(user_id))
        .order_by_desc(user_plan::Column::CreatedAt)
        .all(&db)
        .await
    {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(e) => {
            error!("Failed to fetch plans: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    include_completed: bool,
}

// GET /recommendations — pending by default; ?include_completed=true for all.
pub async fn list_recommendations(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Query(query): Query<RecommendationQuery>,
) -> Response {
    let mut finder = PlanRecommendation::find()
        .filter(plan_recommendation::Column::UserId.eq(user_id));
    if !query.include_completed {
        finder = finder.filter(plan_recommendation::Column::Completed.eq(false));
    }

    match finder
        .order_by_asc(plan_recommendation::Column::DueDate)
        .order_by_asc(plan_recommendation::Column::CreatedAt)
        .all(&db)
        .await
    {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => {
            error!("Failed to fetch recommendations: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// POST /recommendations/:id/complete — boolean flip with timestamp. Plan
// progress is derived on read from the completed flags, so nothing else is
// updated here.
pub async fn complete_recommendation(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(recommendation_id): Path<i32>,
) -> Response {
    let recommendation = match PlanRecommendation::find_by_id(recommendation_id).one(&db).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Recommendation not found"})),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to fetch recommendation: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response();
        }
    };

    if recommendation.user_id != user_id {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": "Not your recommendation"})),
        )
            .into_response();
    }

    if recommendation.completed {
        // Already done; completing twice is a no-op.
        return (StatusCode::OK, Json(recommendation)).into_response();
    }

    let category = recommendation.category.clone();
    let now = chrono::Utc::now().naive_utc();
    let mut active: plan_recommendation::ActiveModel = recommendation.into();
    active.completed = Set(true);
    active.completed_at = Set(Some(now));
    active.updated_at = Set(now);

    match active.update(&db).await {
        Ok(row) => {
            tracing::Span::current()
                .record("table", "plan_recommendations")
                .record("action", "complete_recommendation")
                .record("user_id", user_id)
                .record("business_event", "Recommendation completed");
            crate::metrics::increment_recommendations_completed(&category);
            (StatusCode::OK, Json(row)).into_response()
        }
        Err(e) => {
            error!("Failed to complete recommendation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::Serialize;
use serde_json::json;

use crate::analysis::trends::{daily_series, reduce_trend, CheckinMetric, DayPoint, Trend};
use crate::entities::health_checkin;

#[derive(serde::Deserialize)]
pub struct CreateCheckinRequest {
    date: Option<chrono::NaiveDate>,
    mood: i32,
    energy_level: i32,
    sleep_quality: i32,
    symptoms: Option<Vec<String>>,
    notes: Option<String>,
}

fn in_scale(value: i32) -> bool {
    (1..=10).contains(&value)
}

// Empty symptom lists are stored as NULL, not as an empty array.
fn symptoms_to_json(symptoms: Option<Vec<String>>) -> Option<serde_json::Value> {
    symptoms.filter(|s| !s.is_empty()).map(|s| json!(s))
}

// POST /checkins — one row per user per day; resubmitting the same day
// updates the existing row.
pub async fn create_checkin(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Json(payload): Json<CreateCheckinRequest>,
) -> Response {
    if !in_scale(payload.mood) || !in_scale(payload.energy_level) || !in_scale(payload.sleep_quality)
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Mood, energy and sleep must be between 1 and 10"})),
        )
            .into_response();
    }

    let date = payload.date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let symptoms = symptoms_to_json(payload.symptoms);
    let now = chrono::Utc::now().naive_utc();

    let existing = match health_checkin::Entity::find()
        .filter(health_checkin::Column::UserId.eq(user_id))
        .filter(health_checkin::Column::Date.eq(date))
        .one(&db)
        .await
    {
        Ok(row) => row,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    if let Some(existing) = existing {
        let mut active = existing.into_active_model();
        active.mood = Set(payload.mood);
        active.energy_level = Set(payload.energy_level);
        active.sleep_quality = Set(payload.sleep_quality);
        active.symptoms = Set(symptoms);
        active.notes = Set(payload.notes);
        active.updated_at = Set(now);

        return match active.update(&db).await {
            Ok(row) => {
                tracing::Span::current()
                    .record("table", "health_checkins")
                    .record("action", "update_checkin")
                    .record("user_id", user_id)
                    .record("business_event", "Check-in updated");
                (StatusCode::OK, Json(row)).into_response()
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response(),
        };
    }

    let new_checkin = health_checkin::ActiveModel {
        user_id: Set(user_id),
        date: Set(date),
        mood: Set(payload.mood),
        energy_level: Set(payload.energy_level),
        sleep_quality: Set(payload.sleep_quality),
        symptoms: Set(symptoms),
        notes: Set(payload.notes),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_checkin.insert(&db).await {
        Ok(row) => {
            tracing::Span::current()
                .record("table", "health_checkins")
                .record("action", "create_checkin")
                .record("user_id", user_id)
                .record("business_event", "Check-in submitted");
            crate::metrics::increment_checkins_submitted();
            (StatusCode::CREATED, Json(row)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

// GET /checkins — newest first
pub async fn list_checkins(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    match health_checkin::Entity::find()
        .filter(health_checkin::Column::UserId.eq(user_id))
        .order_by_desc(health_checkin::Column::Date)
        .all(&db)
        .await
    {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

// GET /checkins/today
pub async fn today_checkin(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    let today = chrono::Utc::now().date_naive();
    match health_checkin::Entity::find()
        .filter(health_checkin::Column::UserId.eq(user_id))
        .filter(health_checkin::Column::Date.eq(today))
        .one(&db)
        .await
    {
        Ok(row) => (StatusCode::OK, Json(row)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
pub struct TrendsResponse {
    pub series: Vec<DayPoint>,
    pub mood: Trend,
    pub energy: Trend,
    pub sleep: Trend,
}

// GET /checkins/trends — last 7 days as chart series plus an up/down/flat
// indicator per metric.
pub async fn checkin_trends(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    let recent = match health_checkin::Entity::find()
        .filter(health_checkin::Column::UserId.eq(user_id))
        .order_by_desc(health_checkin::Column::Date)
        .limit(7)
        .all(&db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let response = TrendsResponse {
        series: daily_series(&recent),
        mood: reduce_trend(&recent, CheckinMetric::Mood),
        energy: reduce_trend(&recent, CheckinMetric::Energy),
        sleep: reduce_trend(&recent, CheckinMetric::Sleep),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_bounds() {
        assert!(in_scale(1));
        assert!(in_scale(10));
        assert!(!in_scale(0));
        assert!(!in_scale(11));
    }

    #[test]
    fn no_symptoms_stored_as_null() {
        assert_eq!(symptoms_to_json(None), None);
        assert_eq!(symptoms_to_json(Some(vec![])), None);
    }

    #[test]
    fn reported_symptoms_kept_as_array() {
        let value = symptoms_to_json(Some(vec!["headache".to_string()])).unwrap();
        assert_eq!(value, json!(["headache"]));
    }
}

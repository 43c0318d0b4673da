use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;
use serde_json::json;

use crate::analysis::connections::{derive_connections, SystemConnection};
use crate::analysis::grouping::{group_by_priority, PriorityGroups};
use crate::analysis::insight::summarize;
use crate::analysis::trends::{daily_series, reduce_trend, CheckinMetric, DayPoint, Trend};
use crate::entities::{health_checkin, health_issue};

#[derive(Serialize)]
pub struct MetricTrends {
    pub mood: Trend,
    pub energy: Trend,
    pub sleep: Trend,
}

#[derive(Serialize)]
pub struct InsightsResponse {
    pub groups: PriorityGroups,
    pub insights: Vec<String>,
    pub connections: Vec<SystemConnection>,
    pub series: Vec<DayPoint>,
    pub trends: MetricTrends,
}

// GET /insights — the full aggregation pipeline over the issue catalog and
// the user's recent check-ins.
pub async fn get_insights(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    let issues = health_issue::Entity::find()
        .order_by_desc(health_issue::Column::Load)
        .all(&db);

    let checkins = health_checkin::Entity::find()
        .filter(health_checkin::Column::UserId.eq(user_id))
        .order_by_desc(health_checkin::Column::Date)
        .limit(7)
        .all(&db);

    let (issues, checkins) = match tokio::try_join!(issues, checkins) {
        Ok(pair) => pair,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let insights = summarize(&issues);
    let connections = derive_connections(&issues);
    let response = InsightsResponse {
        groups: group_by_priority(issues),
        insights,
        connections,
        series: daily_series(&checkins),
        trends: MetricTrends {
            mood: reduce_trend(&checkins, CheckinMetric::Mood),
            energy: reduce_trend(&checkins, CheckinMetric::Energy),
            sleep: reduce_trend(&checkins, CheckinMetric::Sleep),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

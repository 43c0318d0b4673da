use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use serde_json::json;

use crate::analysis::severity::{classify_load, SeverityLabel};
use crate::entities::{health_issue, health_system, prelude::*};

// GET /systems
pub async fn list_systems(Extension(db): Extension<DatabaseConnection>) -> Response {
    match HealthSystem::find()
        .order_by_asc(health_system::Column::Name)
        .all(&db)
        .await
    {
        Ok(systems) => (StatusCode::OK, Json(systems)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
struct SystemIssue {
    #[serde(flatten)]
    issue: health_issue::Model,
    severity: SeverityLabel,
}

#[derive(Serialize)]
struct SystemResponse {
    #[serde(flatten)]
    system: health_system::Model,
    issues: Vec<SystemIssue>,
}

// GET /systems/:slug — the category view: a system and the issues filed
// under it, highest load first.
pub async fn get_system(
    Extension(db): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> Response {
    let system = match HealthSystem::find()
        .filter(health_system::Column::Slug.eq(slug.clone()))
        .one(&db)
        .await
    {
        Ok(Some(s)) => s,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Health system not found"})),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    match HealthIssue::find()
        .filter(health_issue::Column::Category.eq(slug))
        .order_by_desc(health_issue::Column::Load)
        .all(&db)
        .await
    {
        Ok(issues) => {
            let issues = issues
                .into_iter()
                .map(|issue| {
                    let severity = classify_load(issue.load);
                    SystemIssue { issue, severity }
                })
                .collect();
            (StatusCode::OK, Json(SystemResponse { system, issues })).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;
use serde_json::json;

use crate::analysis::grouping::{band_for, PriorityBand};
use crate::analysis::severity::{classify_load, SeverityLabel};
use crate::entities::{
    health_issue, issue_detail, issue_recommendation, scanner_component, prelude::*,
};

#[derive(Serialize)]
pub struct IssueSummary {
    #[serde(flatten)]
    pub issue: health_issue::Model,
    pub severity: SeverityLabel,
    pub band: PriorityBand,
}

fn to_summary(issue: health_issue::Model) -> IssueSummary {
    let severity = classify_load(issue.load);
    let band = band_for(issue.load);
    IssueSummary {
        issue,
        severity,
        band,
    }
}

// GET /issues
pub async fn list_issues(Extension(db): Extension<DatabaseConnection>) -> Response {
    match HealthIssue::find()
        .order_by_desc(health_issue::Column::Load)
        .all(&db)
        .await
    {
        Ok(issues) => {
            let summaries: Vec<IssueSummary> = issues.into_iter().map(to_summary).collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
pub struct IssueDetailResponse {
    #[serde(flatten)]
    pub issue: health_issue::Model,
    pub severity: SeverityLabel,
    pub details: Vec<issue_detail::Model>,
    pub scanner_components: Vec<scanner_component::Model>,
    pub issue_recommendations: Vec<issue_recommendation::Model>,
}

// GET /issues/:id — the issue plus its child records, rendered verbatim by
// the detail view.
pub async fn get_issue(
    Extension(db): Extension<DatabaseConnection>,
    Path(issue_id): Path<i32>,
) -> Response {
    let issue = match HealthIssue::find_by_id(issue_id).one(&db).await {
        Ok(Some(i)) => i,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Issue not found"})),
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

    let details = IssueDetail::find()
        .filter(issue_detail::Column::IssueId.eq(issue_id))
        .order_by_asc(issue_detail::Column::DisplayOrder)
        .all(&db);
    let components = ScannerComponent::find()
        .filter(scanner_component::Column::IssueId.eq(issue_id))
        .all(&db);
    let recommendations = IssueRecommendation::find()
        .filter(issue_recommendation::Column::IssueId.eq(issue_id))
        .all(&db);

    match tokio::try_join!(details, components, recommendations) {
        Ok((details, scanner_components, issue_recommendations)) => {
            let severity = classify_load(issue.load);
            (
                StatusCode::OK,
                Json(IssueDetailResponse {
                    issue,
                    severity,
                    details,
                    scanner_components,
                    issue_recommendations,
                }),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

// GET /issues/priority/:band
pub async fn list_issues_by_band(
    Extension(db): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> Response {
    let band = match PriorityBand::from_slug(&slug) {
        Some(b) => b,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Unknown priority band"})),
            )
                .into_response()
        }
    };

    match HealthIssue::find()
        .order_by_desc(health_issue::Column::Load)
        .all(&db)
        .await
    {
        Ok(issues) => {
            let summaries: Vec<IssueSummary> = issues
                .into_iter()
                .filter(|i| band_for(i.load) == band)
                .map(to_summary)
                .collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

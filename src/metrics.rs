use crate::entities::{chat_message, health_checkin, health_issue, plan_recommendation, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::analysis::grouping::band_for;

pub async fn init_metrics(db: &DatabaseConnection) {
    // Total Counts
    let user_count = user::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("coherence_users_total").set(user_count as f64);

    let checkin_count = health_checkin::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("coherence_checkins_total").set(checkin_count as f64);

    let message_count = chat_message::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("coherence_chat_messages_total").set(message_count as f64);

    let pending_count = plan_recommendation::Entity::find()
        .filter(plan_recommendation::Column::Completed.eq(false))
        .count(db)
        .await
        .unwrap_or(0);
    metrics::gauge!("coherence_pending_recommendations_total").set(pending_count as f64);

    // Issue counts per priority band, for the catalog overview dashboard
    let issues = health_issue::Entity::find().all(db).await.unwrap_or_default();
    let mut high = 0u64;
    let mut moderate = 0u64;
    let mut low = 0u64;
    for issue in &issues {
        match band_for(issue.load) {
            crate::analysis::grouping::PriorityBand::High => high += 1,
            crate::analysis::grouping::PriorityBand::Moderate => moderate += 1,
            crate::analysis::grouping::PriorityBand::Low => low += 1,
        }
    }
    metrics::gauge!("coherence_issues_total", "band" => "high").set(high as f64);
    metrics::gauge!("coherence_issues_total", "band" => "moderate").set(moderate as f64);
    metrics::gauge!("coherence_issues_total", "band" => "low").set(low as f64);

    tracing::info!(
        "Initialized metrics: Users={}, Checkins={}, Issues={}, PendingRecommendations={}",
        user_count,
        checkin_count,
        issues.len(),
        pending_count
    );
}

pub fn increment_checkins_submitted() {
    metrics::counter!("coherence_checkins_submitted_total").increment(1);
    metrics::gauge!("coherence_checkins_total").increment(1.0);
}

pub fn increment_recommendations_completed(category: &str) {
    metrics::counter!("coherence_recommendations_completed_total", "category" => category.to_string())
        .increment(1);
    metrics::gauge!("coherence_pending_recommendations_total").decrement(1.0);
}

pub fn increment_chat_requests() {
    metrics::counter!("coherence_chat_requests_total").increment(1);
}

pub fn increment_chat_failures() {
    metrics::counter!("coherence_chat_failures_total").increment(1);
}

pub fn record_assistant_latency(seconds: f64) {
    metrics::histogram!("coherence_assistant_latency_seconds").record(seconds);
}

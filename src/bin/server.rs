use axum::{
    routing::{get, post},
    Extension, Router,
};
use coherence_server::{api, assistant::AssistantClient, migrator};
use sea_orm::{Database, DatabaseConnection};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    coherence_server::telemetry::init_telemetry("coherence-server");

    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    // Database Connection
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    use sea_orm_migration::MigratorTrait;
    migrator::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Initialize Metrics
    coherence_server::metrics::init_metrics(&db).await;

    // Shared assistant client for the chat proxy
    let assistant = Arc::new(AssistantClient::new());

    let app = app(db, assistant, prometheus_layer, metric_handle);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health_check() -> &'static str {
    "OK"
}

fn app(
    db: DatabaseConnection,
    assistant: Arc<AssistantClient>,
    prometheus_layer: axum_prometheus::PrometheusMetricLayer<'static>,
    metric_handle: metrics_exporter_prometheus::PrometheusHandle,
) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login));

    let protected_routes = Router::new()
        .route(
            "/users",
            get(api::profile::get_profile)
                .patch(api::profile::update_profile)
                .delete(api::profile::delete_account),
        )
        .route(
            "/checkins",
            get(api::checkins::list_checkins).post(api::checkins::create_checkin),
        )
        .route("/checkins/today", get(api::checkins::today_checkin))
        .route("/checkins/trends", get(api::checkins::checkin_trends))
        .route("/plans", get(api::plan::list_plans))
        .route("/recommendations", get(api::plan::list_recommendations))
        .route(
            "/recommendations/:id/complete",
            post(api::plan::complete_recommendation),
        )
        .route("/coherence", post(api::coherence::record_scan))
        .route("/chat", post(api::chat::send_message))
        .route("/chat/history", get(api::chat::chat_history))
        .route_layer(axum::middleware::from_fn(api::middleware::auth_middleware));

    // Read-only summary and catalog routes; an unauthenticated visitor is
    // scoped to the demo account instead of rejected.
    let demo_routes = Router::new()
        .route("/dashboard", get(api::dashboard::get_dashboard))
        .route("/insights", get(api::insights::get_insights))
        .route("/coherence/latest", get(api::coherence::latest_score))
        .route("/issues", get(api::issues::list_issues))
        .route("/issues/:id", get(api::issues::get_issue))
        .route(
            "/issues/priority/:band",
            get(api::issues::list_issues_by_band),
        )
        .route("/systems", get(api::systems::list_systems))
        .route("/systems/:slug", get(api::systems::get_system))
        .route("/recipes", get(api::recipes::list_recipes))
        .route("/recipes/:id", get(api::recipes::get_recipe))
        .route_layer(axum::middleware::from_fn(
            api::middleware::auth_or_demo_middleware,
        ));

    // CORS: a configured origin gets credentials; otherwise stay wildcard
    // (credentials cannot be combined with a wildcard origin).
    let cors = match std::env::var("CORS_ORIGIN") {
        Ok(origin) => tower_http::cors::CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .expect("Invalid CORS_ORIGIN"),
            )
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    };

    Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes)
        .merge(protected_routes)
        .merge(demo_routes)
        .layer(Extension(db))
        .layer(Extension(assistant))
        .layer(tower_cookies::CookieManagerLayer::new())
        .layer(prometheus_layer)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched| matched.as_str());

                    // Dynamic Span Name: "METHOD /path" (e.g., "POST /checkins")
                    let span_name = if let Some(path) = matched_path {
                        format!("{} {}", request.method(), path)
                    } else {
                        format!("{} {}", request.method(), request.uri().path())
                    };

                    let user_ip = request
                        .headers()
                        .get("x-forwarded-for")
                        .and_then(|v| v.to_str().ok())
                        .or_else(|| {
                            request
                                .headers()
                                .get("x-real-ip")
                                .and_then(|v| v.to_str().ok())
                        })
                        .unwrap_or("unknown");

                    // Span with explicit fields for handlers to fill in later
                    tracing::info_span!(
                        "request",
                        "otel.name" = span_name,
                        user_ip = user_ip,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        table = tracing::field::Empty,
                        action = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                        user_email = tracing::field::Empty,
                        business_event = tracing::field::Empty,
                        error = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency = tracing::field::Empty,
                    )
                })
                .on_request(
                    |_request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                        // Skip the default "started processing request" log
                    },
                )
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", tracing::field::display(response.status()));
                        span.record("latency", tracing::field::debug(latency));

                        tracing::info!("request completed");
                    },
                ),
        )
        .layer(cors)
        .route("/metrics", get(|| async move { metric_handle.render() }))
}

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
    http::StatusCode,
    middleware::Next,
    Json,
};
use tower_cookies::Cookies;
use serde_json::json;

pub const SESSION_COOKIE: &str = "coherence_user";

pub fn demo_user_id() -> i32 {
    std::env::var("DEMO_USER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

pub async fn auth_middleware(
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Ok(user_id) = cookie.value().parse::<i32>() {
            request.extensions_mut().insert(user_id);
            return next.run(request).await;
        }
    }
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response()
}

// Read-only summary and catalog routes stay usable without a session: an
// unauthenticated request is scoped to the demo account instead of rejected.
pub async fn auth_or_demo_middleware(
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = cookies
        .get(SESSION_COOKIE)
        .and_then(|c| c.value().parse::<i32>().ok())
        .unwrap_or_else(demo_user_id);
    request.extensions_mut().insert(user_id);
    next.run(request).await
}

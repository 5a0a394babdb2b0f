//! HTTP REST API routes

mod session_routes;
mod story_routes;
mod tip_routes;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::application::ports::outbound::LlmPort;
use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Session routes
        .route("/api/sessions", post(session_routes::create_session))
        // Tip routes
        .route(
            "/api/sessions/{id}/tips",
            get(tip_routes::get_tip_progress),
        )
        .route("/api/sessions/{id}/tips", post(tip_routes::generate_tip))
        .route(
            "/api/sessions/{id}/tips/export",
            get(tip_routes::export_tips),
        )
        // Story routes
        .route("/api/stories", post(story_routes::generate_story))
        .route(
            "/api/game-rules/{habit}",
            get(story_routes::get_game_rule),
        )
        .route(
            "/api/comics/panels",
            post(story_routes::extract_comic_panels),
        )
        // Upstream health
        .route("/api/health/llm", get(llm_health))
}

/// Check that the generative API answers with our credentials
async fn llm_health(State(state): State<Arc<AppState>>) -> Result<&'static str, (StatusCode, String)> {
    state
        .llm_client
        .health_check()
        .await
        .map(|_| "OK")
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))
}

//! Story API routes - eco story, mini-game rules and comic panels

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ComicDto, PanelExtractionRequestDto, StoryResponseDto};
use crate::application::services::{StoryRequest, StoryServiceError};
use crate::domain::entities::{ComicScript, GameRule};
use crate::domain::services::extract_panels;
use crate::infrastructure::state::AppState;

/// Generate a story, its mini-game and its comic
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StoryRequest>,
) -> Result<Json<StoryResponseDto>, (StatusCode, String)> {
    let story = state
        .story_service
        .generate(&req)
        .await
        .map_err(|e| match e {
            StoryServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            StoryServiceError::LlmError(_) => {
                tracing::error!("Story generation failed: {}", e);
                (StatusCode::BAD_GATEWAY, format!("API error: {}", e))
            }
        })?;

    Ok(Json(story.into()))
}

/// Mini-game rule for a habit
pub async fn get_game_rule(Path(habit): Path<String>) -> Json<GameRule> {
    Json(GameRule::for_habit(&habit))
}

/// Split a comic script the client already has into panels
pub async fn extract_comic_panels(Json(req): Json<PanelExtractionRequestDto>) -> Json<ComicDto> {
    let panels = extract_panels(&req.text);
    Json(ComicDto::from(ComicScript {
        raw_text: req.text,
        panels,
    }))
}

//! Tip API routes - generation, progress and download

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{TipProgressDto, TipResponseDto};
use crate::application::services::{TipRequest, TipServiceError};
use crate::infrastructure::state::AppState;

use super::session_routes::find_session;

const EXPORT_FILE_NAME: &str = "water_tips_summary.txt";

/// Generate a personalized tip and add it to the session's history
pub async fn generate_tip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<TipRequest>,
) -> Result<Json<TipResponseDto>, (StatusCode, String)> {
    let session = find_session(&state, &id).await?;
    let mut session = session.lock().await;

    let result = state
        .tip_service
        .generate_tip(&mut session, &req)
        .await
        .map_err(|e| match e {
            TipServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            TipServiceError::LlmError(_) => {
                tracing::error!("Tip generation failed for session {}: {}", id, e);
                (StatusCode::BAD_GATEWAY, format!("API error: {}", e))
            }
        })?;

    Ok(Json(TipResponseDto::new(result, session.tips_used())))
}

/// Tips generated so far in this session
pub async fn get_tip_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TipProgressDto>, (StatusCode, String)> {
    let session = find_session(&state, &id).await?;
    let session = session.lock().await;

    Ok(Json(TipProgressDto::from(&*session)))
}

/// Download all tips as a plain-text file
pub async fn export_tips(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let session = find_session(&state, &id).await?;
    let text = session.lock().await.export_text();

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        text,
    ))
}

//! Session API routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::SessionCreatedDto;
use crate::domain::value_objects::SessionId;
use crate::infrastructure::session::SharedTipSession;
use crate::infrastructure::state::AppState;

/// Start a new tip session
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionCreatedDto>) {
    let session_id = state.sessions.write().await.create_session();

    (
        StatusCode::CREATED,
        Json(SessionCreatedDto {
            session_id: session_id.to_string(),
        }),
    )
}

/// Resolve a session from its path parameter
pub(super) async fn find_session(
    state: &AppState,
    id: &str,
) -> Result<SharedTipSession, (StatusCode, String)> {
    let uuid = Uuid::parse_str(id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID".to_string()))?;

    state
        .sessions
        .read()
        .await
        .get_session(SessionId::from_uuid(uuid))
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))
}

//! Session management for tip progress
//!
//! Every browser session gets its own `TipSession` behind its own mutex, so
//! actions within one session run one after another while different
//! sessions never contend with each other.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::TipSession;
use crate::domain::value_objects::SessionId;

pub type SharedTipSession = Arc<Mutex<TipSession>>;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, SharedTipSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with a generated ID
    pub fn create_session(&mut self) -> SessionId {
        let session_id = SessionId::new();
        self.sessions
            .insert(session_id, Arc::new(Mutex::new(TipSession::new(session_id))));

        tracing::info!("Created new session {}", session_id);
        session_id
    }

    pub fn get_session(&self, session_id: SessionId) -> Result<SharedTipSession, SessionError> {
        self.sessions
            .get(&session_id)
            .cloned()
            .ok_or(SessionError::NotFound(session_id))
    }
}

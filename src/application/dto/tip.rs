use serde::Serialize;

use crate::domain::entities::{TipResult, TipSession};

#[derive(Debug, Serialize)]
pub struct SessionCreatedDto {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct TipResponseDto {
    pub tip: String,
    pub challenge: String,
    pub tips_used: u32,
}

impl TipResponseDto {
    pub fn new(result: TipResult, tips_used: u32) -> Self {
        Self {
            tip: result.rewritten_phrase,
            challenge: result.challenge,
            tips_used,
        }
    }
}

/// Tip progress shown under the tip form
#[derive(Debug, Serialize)]
pub struct TipProgressDto {
    pub tips_used: u32,
    pub last_tip: Option<String>,
    pub history: Vec<String>,
}

impl From<&TipSession> for TipProgressDto {
    fn from(session: &TipSession) -> Self {
        Self {
            tips_used: session.tips_used(),
            last_tip: session.last_tip().map(String::from),
            history: session.history().to_vec(),
        }
    }
}

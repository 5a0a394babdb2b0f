//! Per-session tip progress
//!
//! Each browser session owns exactly one `TipSession`. It records every tip
//! the child has received, in order, and is the source for the download.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::SessionId;

#[derive(Debug, Clone, Serialize)]
pub struct TipSession {
    pub id: SessionId,
    history: Vec<String>,
    tips_used: u32,
    last_tip: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TipSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            history: Vec::new(),
            tips_used: 0,
            last_tip: None,
            created_at: Utc::now(),
        }
    }

    /// Record a successfully generated tip.
    ///
    /// History is append-only; entries are formatted `"{name} ({age}) - {tip}"`.
    pub fn record_tip(&mut self, child_name: &str, child_age: u8, final_tip: &str) {
        self.history
            .push(format!("{} ({}) - {}", child_name, child_age, final_tip));
        self.last_tip = Some(final_tip.to_string());
        self.tips_used += 1;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn tips_used(&self) -> u32 {
        self.tips_used
    }

    pub fn last_tip(&self) -> Option<&str> {
        self.last_tip.as_deref()
    }

    /// Plain-text export: history entries joined by newlines, no escaping
    pub fn export_text(&self) -> String {
        self.history.join("\n")
    }
}

//! Tip records and results

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AgeGroup, Routine};

/// Phrase used when the reference table has nothing for an (age band, routine) pair
pub const DEFAULT_TIP_PHRASE: &str = "Always remember to turn off the water when you can!";
/// Challenge paired with [`DEFAULT_TIP_PHRASE`]
pub const DEFAULT_TIP_CHALLENGE: &str = "Try to use less water today!";

/// A pre-authored tip/challenge pair from the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipRecord {
    pub age_group: AgeGroup,
    pub routine: Routine,
    pub phrase: String,
    pub challenge: String,
}

impl TipRecord {
    pub fn new(
        age_group: AgeGroup,
        routine: Routine,
        phrase: impl Into<String>,
        challenge: impl Into<String>,
    ) -> Self {
        Self {
            age_group,
            routine,
            phrase: phrase.into(),
            challenge: challenge.into(),
        }
    }

    pub fn matches(&self, age_group: AgeGroup, routine: Routine) -> bool {
        self.age_group == age_group && self.routine == routine
    }
}

/// The tip chosen before it is rewritten for the child's age
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseTip {
    pub phrase: String,
    pub challenge: String,
    /// True when no table row matched and the default pair was used
    pub is_default: bool,
}

impl BaseTip {
    pub fn fallback() -> Self {
        Self {
            phrase: DEFAULT_TIP_PHRASE.to_string(),
            challenge: DEFAULT_TIP_CHALLENGE.to_string(),
            is_default: true,
        }
    }
}

impl From<&TipRecord> for BaseTip {
    fn from(record: &TipRecord) -> Self {
        Self {
            phrase: record.phrase.clone(),
            challenge: record.challenge.clone(),
            is_default: false,
        }
    }
}

/// A tip rewritten for one child, with its challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipResult {
    pub rewritten_phrase: String,
    pub challenge: String,
}

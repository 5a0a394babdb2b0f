//! Daily water-use routines that key the tip table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Routine {
    #[serde(rename = "Brushing Teeth")]
    BrushingTeeth,
    #[serde(rename = "Washing Hands")]
    WashingHands,
    #[serde(rename = "Showering")]
    Showering,
    #[serde(rename = "Bath Time")]
    BathTime,
    #[serde(rename = "Other")]
    Other,
}

impl Routine {
    pub const ALL: [Routine; 5] = [
        Self::BrushingTeeth,
        Self::WashingHands,
        Self::Showering,
        Self::BathTime,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::BrushingTeeth => "Brushing Teeth",
            Self::WashingHands => "Washing Hands",
            Self::Showering => "Showering",
            Self::BathTime => "Bath Time",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown routine: {0}")]
pub struct UnknownRoutine(pub String);

impl FromStr for Routine {
    type Err = UnknownRoutine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|routine| routine.label() == trimmed)
            .ok_or_else(|| UnknownRoutine(s.to_string()))
    }
}

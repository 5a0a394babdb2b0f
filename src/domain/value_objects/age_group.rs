//! Age bands used to pick age-appropriate tips

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Youngest age the tip selector serves
pub const MIN_CHILD_AGE: u8 = 3;
/// Oldest age the tip selector serves
pub const MAX_CHILD_AGE: u8 = 12;

/// One of three fixed child-age ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "3–5")]
    ThreeToFive,
    #[serde(rename = "6–8")]
    SixToEight,
    #[serde(rename = "9–12")]
    NineToTwelve,
}

impl AgeGroup {
    /// Band a child's age.
    ///
    /// Total over every integer: anything above 8 (or below 3, which callers
    /// reject before getting here) lands in the 9–12 band.
    pub fn from_age(age: u8) -> Self {
        match age {
            3..=5 => Self::ThreeToFive,
            6..=8 => Self::SixToEight,
            _ => Self::NineToTwelve,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeToFive => "3–5",
            Self::SixToEight => "6–8",
            Self::NineToTwelve => "9–12",
        }
    }

    pub fn contains_age(age: u8) -> bool {
        (MIN_CHILD_AGE..=MAX_CHILD_AGE).contains(&age)
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown age group: {0}")]
pub struct UnknownAgeGroup(pub String);

impl FromStr for AgeGroup {
    type Err = UnknownAgeGroup;

    /// Accepts the en-dash labels and their ASCII hyphen spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "–").as_str() {
            "3–5" => Ok(Self::ThreeToFive),
            "6–8" => Ok(Self::SixToEight),
            "9–12" => Ok(Self::NineToTwelve),
            _ => Err(UnknownAgeGroup(s.to_string())),
        }
    }
}

//! Choices a child makes before generating an eco story

use serde::{Deserialize, Serialize};

/// Where the story takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorySetting {
    Bathroom,
    Garden,
    School,
    Beach,
    Forest,
}

impl StorySetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bathroom => "bathroom",
            Self::Garden => "garden",
            Self::School => "school",
            Self::Beach => "beach",
            Self::Forest => "forest",
        }
    }

    /// Setting name with its first letter upper-cased, for story titles
    pub fn capitalized(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// The water habit the story practices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterHabit {
    #[serde(rename = "brushing teeth")]
    BrushingTeeth,
    #[serde(rename = "watering plants")]
    WateringPlants,
    #[serde(rename = "taking showers")]
    TakingShowers,
    #[serde(rename = "fixing leaks")]
    FixingLeaks,
}

impl WaterHabit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrushingTeeth => "brushing teeth",
            Self::WateringPlants => "watering plants",
            Self::TakingShowers => "taking showers",
            Self::FixingLeaks => "fixing leaks",
        }
    }
}

/// Visual theme applied to the comic and the story page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualTheme {
    #[default]
    #[serde(rename = "Blue Drop")]
    BlueDrop,
    #[serde(rename = "Nature Kids")]
    NatureKids,
    #[serde(rename = "Clean City")]
    CleanCity,
    #[serde(rename = "Water Warriors")]
    WaterWarriors,
}

impl VisualTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlueDrop => "Blue Drop",
            Self::NatureKids => "Nature Kids",
            Self::CleanCity => "Clean City",
            Self::WaterWarriors => "Water Warriors",
        }
    }

    pub fn style(&self) -> ThemeStyle {
        let (background, button) = match self {
            Self::BlueDrop => ("#e1f5fe", "#0288d1"),
            Self::NatureKids => ("#e8f5e9", "#388e3c"),
            Self::CleanCity => ("#eeeeee", "#616161"),
            Self::WaterWarriors => ("#fbe9e7", "#e64a19"),
        };
        ThemeStyle {
            background: background.to_string(),
            button: button.to_string(),
        }
    }
}

/// Page colours for a visual theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeStyle {
    pub background: String,
    pub button: String,
}

/// General hints shown next to the mini-game
pub const HELPFUL_HINTS: [&str; 5] = [
    "Turn off taps while brushing your teeth.",
    "Keep showers short and sweet.",
    "Fix leaky faucets quickly.",
    "Water plants early morning or evening.",
    "Use buckets instead of hoses when cleaning.",
];

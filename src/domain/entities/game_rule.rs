//! Mini-game rules that accompany an eco story

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRule {
    pub challenge: String,
    pub goal: String,
    pub points: String,
}

impl GameRule {
    fn new(challenge: &str, goal: &str, points: &str) -> Self {
        Self {
            challenge: challenge.to_string(),
            goal: goal.to_string(),
            points: points.to_string(),
        }
    }

    /// Look up the rule for a habit, ignoring case.
    ///
    /// Never fails: habits without a dedicated game get the generic rule.
    pub fn for_habit(habit: &str) -> Self {
        match habit.trim().to_lowercase().as_str() {
            "brushing teeth" => Self::new(
                "🪥 Tap to turn off the faucet while brushing.",
                "Save 10 gallons by acting quickly!",
                "+5 per correct tap, -2 for misses.",
            ),
            "watering plants" => Self::new(
                "🌿 Water only dry plants. Skip the ones already wet.",
                "Keep your garden healthy and hydrated!",
                "+10 correct, -5 for overwatering.",
            ),
            "taking showers" => Self::new(
                "🚿 Finish your shower in under 2 minutes.",
                "Use under 5 gallons total!",
                "+2 per second saved.",
            ),
            "fixing leaks" => Self::new(
                "🔧 Tap leaks before the bucket fills.",
                "Fix 10 leaks in time!",
                "+5 per fix, -3 for missed.",
            ),
            _ => Self::generic(),
        }
    }

    pub fn generic() -> Self {
        Self::new(
            "💧 Make a smart water-saving choice!",
            "Reduce waste and become an Eco Hero!",
            "+5 per smart move.",
        )
    }
}

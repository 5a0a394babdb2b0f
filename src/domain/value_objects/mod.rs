//! Value objects - Immutable objects defined by their attributes

mod age_group;
mod ids;
mod routine;
mod settings;
mod story_options;

pub use age_group::{AgeGroup, MAX_CHILD_AGE, MIN_CHILD_AGE};
pub use ids::SessionId;
pub use routine::Routine;
pub use settings::GenerationSettings;
pub use story_options::{StorySetting, ThemeStyle, VisualTheme, WaterHabit, HELPFUL_HINTS};

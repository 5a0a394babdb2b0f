//! Generation tuning settings
//!
//! Sampling parameters for each kind of generated content. Defaults match the
//! values the app has always shipped with; each can be overridden from the
//! environment without touching code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    // Tip rewriting
    pub tip_temperature: f32,
    pub tip_max_tokens: u32,

    // Story writing
    pub story_temperature: f32,
    pub story_max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            tip_temperature: 0.9,
            tip_max_tokens: 100,
            story_temperature: 0.8,
            story_max_tokens: 800,
        }
    }
}

impl GenerationSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tip_temperature: env_or("WATERHABITS_TIP_TEMPERATURE", defaults.tip_temperature),
            tip_max_tokens: env_or("WATERHABITS_TIP_MAX_TOKENS", defaults.tip_max_tokens),
            story_temperature: env_or("WATERHABITS_STORY_TEMPERATURE", defaults.story_temperature),
            story_max_tokens: env_or("WATERHABITS_STORY_MAX_TOKENS", defaults.story_max_tokens),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.tip_max_tokens, 100);
        assert_eq!(settings.story_max_tokens, 800);
        assert!(settings.tip_temperature > settings.story_temperature);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_or_garbage() {
        assert_eq!(env_or("WATERHABITS_TEST_UNSET_KEY", 42u32), 42);

        std::env::set_var("WATERHABITS_TEST_GARBAGE_KEY", "lots");
        assert_eq!(env_or("WATERHABITS_TEST_GARBAGE_KEY", 42u32), 42);
    }

    #[test]
    fn test_env_or_reads_parseable_value() {
        std::env::set_var("WATERHABITS_TEST_NUMERIC_KEY", "0.5");
        assert_eq!(env_or("WATERHABITS_TEST_NUMERIC_KEY", 0.9f32), 0.5);
    }
}

//! Prompt building functions for LLM and image requests

use crate::domain::value_objects::{StorySetting, VisualTheme, WaterHabit};

/// System message for story writing
pub const STORYTELLER_SYSTEM_PROMPT: &str =
    "You are a creative children's storyteller focused on sustainability.";

/// Ask for a base tip to be rewritten for a child of an exact age
pub fn build_tip_rewrite_prompt(child_age: u8, base_phrase: &str) -> String {
    format!(
        "Rewrite this for a {}-year-old in a fun way: '{}'",
        child_age, base_phrase
    )
}

/// Build the user prompt for an eco story
pub fn build_story_prompt(hero_name: &str, setting: StorySetting, habit: WaterHabit) -> String {
    format!(
        "Write a fun children's story about {}, a young eco-hero in the {}, \
         learning to save water by practicing {}. \
         Include a friendly sidekick and end with a water-saving tip.",
        hero_name,
        setting.as_str(),
        habit.as_str()
    )
}

/// Ask for a numbered 4-6 panel comic script based on a story
pub fn build_comic_prompt(theme: VisualTheme, story: &str) -> String {
    format!(
        "You are a comic artist turning this children's story into a 4-6 panel comic. \
         Number each panel and describe each scene visually, 1–2 sentences per panel. \
         Apply this theme: {}. Story:\n{}",
        theme.as_str(),
        story
    )
}

/// Prompt for illustrating one comic panel
pub fn build_panel_image_prompt(theme: VisualTheme, description: &str) -> String {
    format!(
        "Children's comic panel, {} theme, bright friendly cartoon style: {}",
        theme.as_str(),
        description
    )
}

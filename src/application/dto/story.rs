use serde::{Deserialize, Serialize};

use crate::application::services::EcoStory;
use crate::domain::entities::{ComicPanel, ComicScript, GameRule};
use crate::domain::value_objects::ThemeStyle;

#[derive(Debug, Serialize)]
pub struct StoryResponseDto {
    pub title: String,
    pub story: String,
    pub game_rule: GameRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comic: Option<ComicDto>,
    pub theme_style: ThemeStyle,
    pub hints: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<EcoStory> for StoryResponseDto {
    fn from(s: EcoStory) -> Self {
        Self {
            title: s.title,
            story: s.story,
            game_rule: s.game_rule,
            comic: s.comic.map(ComicDto::from),
            theme_style: s.theme_style,
            hints: s.hints,
            warnings: s.warnings,
        }
    }
}

/// Comic panels, or the raw script when it could not be split into panels
#[derive(Debug, Serialize)]
pub struct ComicDto {
    pub parsed: bool,
    pub panels: Vec<ComicPanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl From<ComicScript> for ComicDto {
    fn from(c: ComicScript) -> Self {
        let parsed = c.parsed();
        Self {
            parsed,
            raw_text: (!parsed).then_some(c.raw_text),
            panels: c.panels,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PanelExtractionRequestDto {
    pub text: String,
}

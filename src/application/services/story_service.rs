//! Story Service - Eco story, mini-game and comic in one pass
//!
//! The story itself is the only required part. The comic script and the
//! panel illustrations are best-effort: when they fail the story is still
//! returned, with a warning for each missing piece.

use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::outbound::{ChatMessage, ImageGenerationPort, LlmPort, LlmRequest};
use crate::application::services::llm::prompt_builder::{
    build_comic_prompt, build_panel_image_prompt, build_story_prompt, STORYTELLER_SYSTEM_PROMPT,
};
use crate::domain::entities::{ComicPanel, ComicScript, GameRule};
use crate::domain::services::extract_panels;
use crate::domain::value_objects::{
    GenerationSettings, StorySetting, ThemeStyle, VisualTheme, WaterHabit, HELPFUL_HINTS,
};

pub const DEFAULT_STORY_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_COMIC_MODEL: &str = "gpt-4";
pub const DEFAULT_IMAGE_SIZE: &str = "512x512";

#[derive(Debug, thiserror::Error)]
pub enum StoryServiceError {
    #[error("LLM error: {0}")]
    LlmError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn default_show_hints() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoryRequest {
    pub hero_name: String,
    pub setting: StorySetting,
    pub habit: WaterHabit,
    #[serde(default)]
    pub visual_theme: VisualTheme,
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

impl StoryRequest {
    pub fn validate(&self) -> Result<(), StoryServiceError> {
        if self.hero_name.trim().is_empty() {
            return Err(StoryServiceError::InvalidRequest(
                "Please enter your hero's name.".to_string(),
            ));
        }
        Ok(())
    }

    /// `"{hero}'s Adventure in the {Setting}"`
    pub fn title(&self) -> String {
        format!(
            "{}'s Adventure in the {}",
            self.hero_name.trim(),
            self.setting.capitalized()
        )
    }
}

/// Everything the story page shows
#[derive(Debug, Clone)]
pub struct EcoStory {
    pub title: String,
    pub story: String,
    pub game_rule: GameRule,
    pub comic: Option<ComicScript>,
    pub theme_style: ThemeStyle,
    pub hints: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct StoryService<L: LlmPort, I: ImageGenerationPort> {
    llm: Arc<L>,
    images: Option<Arc<I>>,
    settings: GenerationSettings,
    story_model: String,
    comic_model: String,
    image_size: String,
}

impl<L: LlmPort, I: ImageGenerationPort> StoryService<L, I> {
    /// Create a story service; pass `None` to skip panel illustrations
    pub fn new(llm: Arc<L>, images: Option<Arc<I>>) -> Self {
        Self {
            llm,
            images,
            settings: GenerationSettings::default(),
            story_model: DEFAULT_STORY_MODEL.to_string(),
            comic_model: DEFAULT_COMIC_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }

    pub fn with_models(
        mut self,
        story_model: impl Into<String>,
        comic_model: impl Into<String>,
    ) -> Self {
        self.story_model = story_model.into();
        self.comic_model = comic_model.into();
        self
    }

    pub fn with_image_size(mut self, size: impl Into<String>) -> Self {
        self.image_size = size.into();
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run the full pipeline for one "Generate My Eco Adventure" action
    pub async fn generate(&self, request: &StoryRequest) -> Result<EcoStory, StoryServiceError> {
        request.validate()?;

        let story = self.write_story(request).await?;
        let game_rule = GameRule::for_habit(request.habit.as_str());
        let mut warnings = Vec::new();

        let comic = match self.write_comic_script(request.visual_theme, &story).await {
            Ok(raw_text) => {
                let panels = extract_panels(&raw_text);
                if panels.is_empty() {
                    tracing::warn!("Comic script did not follow the numbered panel format");
                    warnings.push(
                        "Could not parse comic panels. Showing the raw text instead.".to_string(),
                    );
                }
                let panels = self
                    .illustrate_panels(request.visual_theme, panels, &mut warnings)
                    .await;
                Some(ComicScript { raw_text, panels })
            }
            Err(e) => {
                tracing::warn!("Comic generation failed: {}", e);
                warnings.push(format!("Could not generate the comic: {}", e));
                None
            }
        };

        let hints = if request.show_hints {
            HELPFUL_HINTS.iter().map(|hint| hint.to_string()).collect()
        } else {
            Vec::new()
        };

        Ok(EcoStory {
            title: request.title(),
            story,
            game_rule,
            comic,
            theme_style: request.visual_theme.style(),
            hints,
            warnings,
        })
    }

    /// Write the story text
    pub async fn write_story(&self, request: &StoryRequest) -> Result<String, StoryServiceError> {
        let prompt = build_story_prompt(request.hero_name.trim(), request.setting, request.habit);

        let llm_request = LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_system_prompt(STORYTELLER_SYSTEM_PROMPT)
            .with_model(self.story_model.clone())
            .with_temperature(self.settings.story_temperature)
            .with_max_tokens(Some(self.settings.story_max_tokens));

        let response = self
            .llm
            .generate(llm_request)
            .await
            .map_err(|e| StoryServiceError::LlmError(e.to_string()))?;

        Ok(response.content.trim().to_string())
    }

    /// Turn a story into a numbered comic script
    pub async fn write_comic_script(
        &self,
        theme: VisualTheme,
        story: &str,
    ) -> Result<String, StoryServiceError> {
        let llm_request = LlmRequest::new(vec![ChatMessage::user(build_comic_prompt(theme, story))])
            .with_model(self.comic_model.clone());

        let response = self
            .llm
            .generate(llm_request)
            .await
            .map_err(|e| StoryServiceError::LlmError(e.to_string()))?;

        Ok(response.content.trim().to_string())
    }

    /// Illustrate panels one at a time. A panel whose image fails keeps its
    /// description and gets a warning instead.
    async fn illustrate_panels(
        &self,
        theme: VisualTheme,
        panels: Vec<ComicPanel>,
        warnings: &mut Vec<String>,
    ) -> Vec<ComicPanel> {
        let Some(images) = &self.images else {
            return panels;
        };

        let mut illustrated = Vec::with_capacity(panels.len());
        for panel in panels {
            let prompt = build_panel_image_prompt(theme, &panel.description);
            match images.generate_image(&prompt, &self.image_size).await {
                Ok(url) => illustrated.push(panel.with_image(url)),
                Err(e) => {
                    tracing::warn!("Image generation failed for panel {}: {}", panel.index, e);
                    warnings.push(format!("Could not illustrate panel {}: {}", panel.index, e));
                    illustrated.push(panel);
                }
            }
        }
        illustrated
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::application::ports::outbound::LlmResponse;

    const STORY: &str = "  Andy and Drippy fixed every leak in the garden.  ";
    const SCRIPT: &str = "1. Andy spots a leak.\n2. Drippy hands over a wrench.\n3. The tap stops dripping.";

    /// Replies to calls in order; an `Err` entry simulates a failed call
    struct ScriptedLlm {
        replies: StdMutex<Vec<Result<String, String>>>,
        requests: StdMutex<Vec<LlmRequest>>,
    }

    impl ScriptedLlm {
        fn new(replies: Vec<Result<&str, &str>>) -> Self {
            Self {
                replies: StdMutex::new(
                    replies
                        .into_iter()
                        .rev()
                        .map(|r| r.map(String::from).map_err(String::from))
                        .collect(),
                ),
                requests: StdMutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl LlmPort for ScriptedLlm {
        type Error = String;

        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
            self.requests.lock().unwrap().push(request);
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err("no scripted reply".to_string()))?;
            Ok(LlmResponse {
                content: reply,
                finish_reason: Some("stop".to_string()),
            })
        }

        async fn health_check(&self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockImages {
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockImages {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl ImageGenerationPort for MockImages {
        type Error = String;

        async fn generate_image(&self, _prompt: &str, size: &str) -> Result<String, Self::Error> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                Err("content policy".to_string())
            } else {
                Ok(format!("https://images.test/{}/{}.png", size, n))
            }
        }
    }

    fn request() -> StoryRequest {
        StoryRequest {
            hero_name: "Andy".to_string(),
            setting: StorySetting::Garden,
            habit: WaterHabit::FixingLeaks,
            visual_theme: VisualTheme::WaterWarriors,
            show_hints: true,
        }
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let llm = Arc::new(ScriptedLlm::new(vec![Ok(STORY), Ok(SCRIPT)]));
        let images = Arc::new(MockImages::new(false));
        let service = StoryService::new(llm.clone(), Some(images.clone()));

        let story = service.generate(&request()).await.unwrap();

        assert_eq!(story.title, "Andy's Adventure in the Garden");
        assert_eq!(story.story, STORY.trim());
        assert_eq!(story.game_rule, GameRule::for_habit("fixing leaks"));
        assert_eq!(story.theme_style, VisualTheme::WaterWarriors.style());
        assert_eq!(story.hints.len(), HELPFUL_HINTS.len());
        assert!(story.warnings.is_empty());

        let comic = story.comic.unwrap();
        assert!(comic.parsed());
        assert_eq!(comic.panels.len(), 3);
        assert_eq!(comic.panels[1].description, "Drippy hands over a wrench.");
        assert_eq!(
            comic.panels[2].image_url.as_deref(),
            Some("https://images.test/512x512/3.png")
        );
        assert_eq!(images.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_story_and_comic_requests() {
        let llm = Arc::new(ScriptedLlm::new(vec![Ok(STORY), Ok(SCRIPT)]));
        let service = StoryService::<_, MockImages>::new(llm.clone(), None)
            .with_models("story-model", "comic-model");

        service.generate(&request()).await.unwrap();

        let requests = llm.requests.lock().unwrap();
        let story_request = &requests[0];
        assert_eq!(story_request.model.as_deref(), Some("story-model"));
        assert_eq!(story_request.system_prompt.as_deref(), Some(STORYTELLER_SYSTEM_PROMPT));
        assert_eq!(story_request.temperature, Some(0.8));
        assert_eq!(story_request.max_tokens, Some(800));
        assert_eq!(
            story_request.messages,
            vec![ChatMessage::user(build_story_prompt(
                "Andy",
                StorySetting::Garden,
                WaterHabit::FixingLeaks
            ))]
        );

        let comic_request = &requests[1];
        assert_eq!(comic_request.model.as_deref(), Some("comic-model"));
        assert_eq!(comic_request.temperature, None);
        assert!(comic_request.messages[0].content.ends_with(STORY.trim()));
    }

    #[tokio::test]
    async fn test_failed_images_keep_panels() {
        let llm = Arc::new(ScriptedLlm::new(vec![Ok(STORY), Ok(SCRIPT)]));
        let images = Arc::new(MockImages::new(true));
        let service = StoryService::new(llm, Some(images));

        let story = service.generate(&request()).await.unwrap();

        let comic = story.comic.unwrap();
        assert_eq!(comic.panels.len(), 3);
        assert!(comic.panels.iter().all(|p| p.image_url.is_none()));
        assert_eq!(story.warnings.len(), 3);
        assert!(story.warnings[0].contains("panel 1"));
    }

    #[tokio::test]
    async fn test_unparseable_script_falls_back_to_raw_text() {
        let raw = "Andy finds a leak, then fixes it with Drippy.";
        let llm = Arc::new(ScriptedLlm::new(vec![Ok(STORY), Ok(raw)]));
        let images = Arc::new(MockImages::new(false));
        let service = StoryService::new(llm, Some(images.clone()));

        let story = service.generate(&request()).await.unwrap();

        let comic = story.comic.unwrap();
        assert!(!comic.parsed());
        assert_eq!(comic.raw_text, raw);
        assert_eq!(images.calls.load(Ordering::SeqCst), 0);
        assert_eq!(story.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_comic_failure_still_returns_story() {
        let llm = Arc::new(ScriptedLlm::new(vec![Ok(STORY), Err("timeout")]));
        let service = StoryService::<_, MockImages>::new(llm, None);

        let story = service.generate(&request()).await.unwrap();

        assert!(story.comic.is_none());
        assert_eq!(story.story, STORY.trim());
        assert!(story.warnings[0].contains("timeout"));
    }

    #[tokio::test]
    async fn test_story_failure_is_an_error() {
        let llm = Arc::new(ScriptedLlm::new(vec![Err("quota exceeded")]));
        let service = StoryService::<_, MockImages>::new(llm.clone(), None);

        let err = service.generate(&request()).await.unwrap_err();

        assert!(matches!(err, StoryServiceError::LlmError(_)));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_hero_is_rejected_before_llm_call() {
        let llm = Arc::new(ScriptedLlm::new(vec![]));
        let service = StoryService::<_, MockImages>::new(llm.clone(), None);
        let mut req = request();
        req.hero_name = String::new();

        let err = service.generate(&req).await.unwrap_err();

        assert!(matches!(err, StoryServiceError::InvalidRequest(_)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_hints_can_be_hidden() {
        let llm = Arc::new(ScriptedLlm::new(vec![Ok(STORY), Ok(SCRIPT)]));
        let service = StoryService::<_, MockImages>::new(llm, None);
        let mut req = request();
        req.show_hints = false;

        let story = service.generate(&req).await.unwrap();

        assert!(story.hints.is_empty());
    }

    #[test]
    fn test_request_defaults_from_json() {
        let req: StoryRequest = serde_json::from_str(
            r#"{"hero_name": "Bella", "setting": "beach", "habit": "taking showers"}"#,
        )
        .unwrap();

        assert_eq!(req.visual_theme, VisualTheme::BlueDrop);
        assert!(req.show_hints);
        assert_eq!(req.title(), "Bella's Adventure in the Beach");
    }
}

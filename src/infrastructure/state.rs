//! Shared application state

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::application::services::{StoryService, TipService};
use crate::domain::aggregates::TipTable;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::persistence::load_tip_table;
use crate::infrastructure::session::SessionManager;

/// Shared application state
pub struct AppState {
    pub llm_client: Arc<OpenAiClient>,
    /// Active tip sessions
    pub sessions: RwLock<SessionManager>,
    // Application services
    pub tip_service: TipService<OpenAiClient>,
    pub story_service: StoryService<OpenAiClient, OpenAiClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let tip_table = load_tip_table(&config.tips_data_path)?;
        tracing::info!("Loaded {} tips from {}", tip_table.len(), config.tips_data_path);

        let llm_client = Arc::new(OpenAiClient::new(
            &config.openai_base_url,
            &config.openai_api_key,
            &config.story_model,
            &config.image_model,
        ));

        Ok(Self::with_client(config, llm_client, tip_table))
    }

    /// Wire services around an existing client and table
    pub fn with_client(config: AppConfig, llm_client: Arc<OpenAiClient>, tip_table: TipTable) -> Self {
        let mut tip_service = TipService::new(llm_client.clone(), Arc::new(tip_table))
            .with_model(config.tip_model.clone())
            .with_settings(config.generation.clone());
        if let Some(seed) = config.tip_rng_seed {
            tracing::info!("Tip selection seeded with {}", seed);
            tip_service = tip_service.with_seed(seed);
        }

        let images = config
            .image_generation_enabled
            .then(|| llm_client.clone());
        let story_service = StoryService::new(llm_client.clone(), images)
            .with_models(config.story_model.clone(), config.comic_model.clone())
            .with_image_size(config.image_size.clone())
            .with_settings(config.generation.clone());

        Self {
            llm_client,
            sessions: RwLock::new(SessionManager::new()),
            tip_service,
            story_service,
        }
    }
}

//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::application::services::story_service::{
    DEFAULT_COMIC_MODEL, DEFAULT_IMAGE_SIZE, DEFAULT_STORY_MODEL,
};
use crate::application::services::tip_service::DEFAULT_TIP_MODEL;
use crate::domain::value_objects::GenerationSettings;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenAI-compatible API base URL
    pub openai_base_url: String,
    /// API key for the text and image endpoints
    pub openai_api_key: String,

    /// Model that rewrites tips
    pub tip_model: String,
    /// Model that writes stories
    pub story_model: String,
    /// Model that turns stories into comic scripts
    pub comic_model: String,
    /// Model that illustrates comic panels
    pub image_model: String,
    /// Panel illustration size, `WIDTHxHEIGHT`
    pub image_size: String,
    pub image_generation_enabled: bool,

    /// Reference tip table (CSV)
    pub tips_data_path: String,
    /// Fixed seed for tip selection; entropy when unset
    pub tip_rng_seed: Option<u64>,

    pub generation: GenerationSettings,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY environment variable is required")?,

            tip_model: env::var("TIP_MODEL").unwrap_or_else(|_| DEFAULT_TIP_MODEL.to_string()),
            story_model: env::var("STORY_MODEL")
                .unwrap_or_else(|_| DEFAULT_STORY_MODEL.to_string()),
            comic_model: env::var("COMIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMIC_MODEL.to_string()),
            image_model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "dall-e-2".to_string()),
            image_size: env::var("IMAGE_SIZE").unwrap_or_else(|_| DEFAULT_IMAGE_SIZE.to_string()),
            image_generation_enabled: env::var("IMAGE_GENERATION_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<bool>()
                .context("IMAGE_GENERATION_ENABLED must be true or false")?,

            tips_data_path: env::var("TIPS_DATA_PATH")
                .unwrap_or_else(|_| "data/tips.csv".to_string()),
            tip_rng_seed: env::var("TIP_RNG_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("TIP_RNG_SEED must be an unsigned integer")?,

            generation: GenerationSettings::from_env(),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

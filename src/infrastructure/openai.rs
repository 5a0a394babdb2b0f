//! OpenAI-compatible client for chat completions and image generation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    ChatMessage, ImageGenerationPort, LlmPort, LlmRequest, LlmResponse,
};

/// Client for the `/chat/completions` and `/images/generations` endpoints
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    default_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, default_model: &str, image_model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            default_model: default_model.to_string(),
            image_model: image_model.to_string(),
        }
    }

    /// Send a chat completion and return the first choice
    pub async fn chat(&self, request: &LlmRequest) -> Result<LlmResponse, OpenAiError> {
        let body = self.chat_body(request);
        tracing::debug!(model = %body.model, "Sending chat completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(OpenAiError::ApiError(error_text));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        first_choice(completion)
    }

    /// Generate one image and return its URL
    pub async fn create_image(&self, prompt: &str, size: &str) -> Result<String, OpenAiError> {
        let body = ImageGenerationRequest {
            model: self.image_model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: size.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(OpenAiError::ApiError(error_text));
        }

        let images: ImageGenerationResponse = response.json().await?;
        images
            .data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or(OpenAiError::EmptyResponse)
    }

    /// Check if the API is reachable with our key
    pub async fn list_models(&self) -> Result<bool, OpenAiError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    fn chat_body(&self, request: &LlmRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.default_model.clone()),
            messages: request.wire_messages(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

fn first_choice(completion: ChatCompletionResponse) -> Result<LlmResponse, OpenAiError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or(OpenAiError::EmptyResponse)?;

    Ok(LlmResponse {
        content: choice.message.content.ok_or(OpenAiError::EmptyResponse)?,
        finish_reason: choice.finish_reason,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Response contained no content")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl LlmPort for OpenAiClient {
    type Error = OpenAiError;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        self.chat(&request).await
    }

    async fn health_check(&self) -> Result<(), Self::Error> {
        if self.list_models().await? {
            Ok(())
        } else {
            Err(OpenAiError::ApiError("model listing was rejected".to_string()))
        }
    }
}

#[async_trait]
impl ImageGenerationPort for OpenAiClient {
    type Error = OpenAiError;

    async fn generate_image(&self, prompt: &str, size: &str) -> Result<String, Self::Error> {
        self.create_image(prompt, size).await
    }
}

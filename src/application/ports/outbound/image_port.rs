//! Image generation port

use async_trait::async_trait;

/// Port for text-to-image backends
#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    type Error: std::fmt::Display + Send;

    /// Generate one image and return a URL the frontend can display.
    ///
    /// `size` is a `WIDTHxHEIGHT` string such as `512x512`.
    async fn generate_image(&self, prompt: &str, size: &str) -> Result<String, Self::Error>;
}

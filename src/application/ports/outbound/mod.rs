//! Outbound ports - Interfaces that the application requires from external systems

mod image_port;
mod llm_port;

pub use image_port::ImageGenerationPort;
pub use llm_port::{ChatMessage, LlmPort, LlmRequest, LlmResponse};

//! Application services - Use case implementations
//!
//! Each service is generic over the outbound ports it needs, so tests can
//! drive it with in-memory mocks instead of a live model.

pub mod llm;
pub mod story_service;
pub mod tip_service;

pub use story_service::{EcoStory, StoryRequest, StoryService, StoryServiceError};
pub use tip_service::{TipRequest, TipService, TipServiceError};

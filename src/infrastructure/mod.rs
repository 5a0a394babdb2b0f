//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: CSV loader for the reference tip table
//! - HTTP: REST API routes
//! - OpenAI: text and image generation client
//! - Config: Application configuration
//! - State: Shared application state
//! - Session: Per-session tip progress

pub mod config;
pub mod http;
pub mod openai;
pub mod persistence;
pub mod session;
pub mod state;

//! Application layer - Use cases, ports and DTOs
//!
//! This layer contains:
//! - Ports: LLM and image generation interfaces
//! - Services: tip selection and the eco story pipeline
//! - DTOs: request/response shapes for the HTTP API

pub mod dto;
pub mod ports;
pub mod services;

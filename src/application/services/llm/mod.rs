//! LLM helpers shared by the application services

pub mod prompt_builder;

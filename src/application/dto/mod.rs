//! Data Transfer Objects - For API boundaries
//!
//! Response shapes for the HTTP layer, mapped from service results.

pub mod story;
pub mod tip;

pub use story::*;
pub use tip::*;

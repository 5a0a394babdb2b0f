//! Domain services - Pure operations over domain objects

pub mod panel_extractor;

pub use panel_extractor::extract_panels;

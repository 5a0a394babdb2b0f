//! Comic panels recovered from a generated comic script

use serde::{Deserialize, Serialize};

/// One scene of the eco comic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicPanel {
    /// 1-based position in the extracted sequence
    pub index: usize,
    pub description: String,
    /// Illustration, when one was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ComicPanel {
    pub fn new(index: usize, description: impl Into<String>) -> Self {
        Self {
            index,
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A comic script together with the panels that could be parsed from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComicScript {
    pub raw_text: String,
    pub panels: Vec<ComicPanel>,
}

impl ComicScript {
    /// Whether the script followed the numbered-panel format
    pub fn parsed(&self) -> bool {
        !self.panels.is_empty()
    }
}

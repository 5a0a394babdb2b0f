//! Splits a generated comic script into numbered panels
//!
//! The first panel starts at the first ordinal marker such as `1. ` or `12. `,
//! even when a preamble precedes it on the same line. Every later panel
//! starts at a marker that begins a line, so numbers inside a description
//! (`3.5 gallons`) never split it. The marker itself is only a delimiter:
//! panels are re-numbered 1..N in the order they appear, whatever numerals
//! the script used.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::ComicPanel;

/// Upper bound on panels kept from one script
pub const MAX_COMIC_PANELS: usize = 6;

static FIRST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s").unwrap());

static LINE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.\s").unwrap());

/// Extract at most [`MAX_COMIC_PANELS`] panels from `text`.
///
/// Returns an empty vector when the text has no ordinal markers; callers show
/// the raw script instead.
pub fn extract_panels(text: &str) -> Vec<ComicPanel> {
    let Some(first) = FIRST_MARKER.find(text) else {
        return Vec::new();
    };

    // (marker start, description start) for each panel
    let markers: Vec<(usize, usize)> = std::iter::once((first.start(), first.end()))
        .chain(
            LINE_MARKER
                .find_iter(text)
                .filter(|m| m.start() >= first.end())
                .map(|m| (m.start(), m.end())),
        )
        .collect();

    markers
        .iter()
        .enumerate()
        .take(MAX_COMIC_PANELS)
        .map(|(idx, &(_, body_start))| {
            let end = markers
                .get(idx + 1)
                .map(|&(next_start, _)| next_start)
                .unwrap_or(text.len());
            ComicPanel::new(idx + 1, text[body_start..end].trim())
        })
        .collect()
}

//! Extraction result envelope.

use super::ResolvedPage;
use serde::{Deserialize, Serialize};

/// Separator placed between page texts.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Outcome of one extraction call.
///
/// Only constructed through [`ExtractionResult::from_pages`] and
/// [`ExtractionResult::failure`], so `num_pages == pages.len()` and the
/// joined text always agree with the pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Page texts joined with a blank line
    pub text: String,

    /// Pages in discovery order
    pub pages: Vec<ResolvedPage>,

    /// False only when extraction hit a fatal error
    pub success: bool,

    /// Error message for failed extractions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Always equal to `pages.len()`
    pub num_pages: usize,
}

impl ExtractionResult {
    /// Build a successful result from resolved pages.
    pub fn from_pages(pages: Vec<ResolvedPage>) -> Self {
        let text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);

        Self {
            text,
            num_pages: pages.len(),
            pages,
            success: true,
            error: None,
        }
    }

    /// Build a failed result carrying an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            pages: Vec::new(),
            success: false,
            error: Some(message.into()),
            num_pages: 0,
        }
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

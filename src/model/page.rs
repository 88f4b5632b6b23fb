//! Page-level types.

use super::Dictionary;
use serde::{Deserialize, Serialize};

/// One logical page of extracted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    /// Page number (1-indexed, in discovery order)
    pub page_number: u32,

    /// Decoded text, possibly empty
    pub text: String,

    /// Copy of the owning object's dictionary
    pub resources: Dictionary,
}

impl ResolvedPage {
    /// Create a new page.
    pub fn new(page_number: u32, text: impl Into<String>, resources: Dictionary) -> Self {
        Self {
            page_number,
            text: text.into(),
            resources,
        }
    }

    /// Check if the page produced no text.
    pub fn is_empty(&self) -> bool {
        crate::parser::trim_pdf_space(&self.text).is_empty()
    }
}

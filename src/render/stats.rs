//! Statistics over extracted text.

use crate::model::ExtractionResult;
use serde::{Deserialize, Serialize};

/// Statistics collected from an extraction result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages
    pub page_count: u32,

    /// Pages whose text is empty
    pub empty_page_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from every page of a result.
    pub fn from_result(result: &ExtractionResult) -> Self {
        let mut stats = Self::new();
        for page in &result.pages {
            stats.page_count += 1;
            if page.is_empty() {
                stats.empty_page_count += 1;
            }
            stats.count_text(&page.text);
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

//! Plain text rendering for extraction results.

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// Options for plain text output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Prefix every page with a `--- Page N ---` line
    pub page_headers: bool,

    /// Leave out pages that produced no text
    pub skip_empty_pages: bool,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable page headers.
    pub fn with_page_headers(mut self, headers: bool) -> Self {
        self.page_headers = headers;
        self
    }

    /// Enable or disable skipping of empty pages.
    pub fn with_skip_empty_pages(mut self, skip: bool) -> Self {
        self.skip_empty_pages = skip;
        self
    }
}

/// Convert an extraction result to plain text.
///
/// With default options this is exactly the result's joined `text`.
/// A failed extraction renders as an error.
pub fn to_text(result: &ExtractionResult, options: &TextOptions) -> Result<String> {
    if !result.success {
        let message = result.error.as_deref().unwrap_or("unknown error");
        return Err(Error::Render(format!("extraction failed: {}", message)));
    }

    if !options.page_headers && !options.skip_empty_pages {
        return Ok(result.text.clone());
    }

    let output = result
        .pages
        .iter()
        .filter(|page| !(options.skip_empty_pages && page.is_empty()))
        .map(|page| {
            if options.page_headers {
                format!("--- Page {} ---\n{}", page.page_number, page.text)
            } else {
                page.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dictionary, ResolvedPage};

    fn sample() -> ExtractionResult {
        ExtractionResult::from_pages(vec![
            ResolvedPage::new(1, "Hello, world!", Dictionary::new()),
            ResolvedPage::new(2, "  ", Dictionary::new()),
            ResolvedPage::new(3, "Bye.", Dictionary::new()),
        ])
    }

    #[test]
    fn test_to_text_default_is_joined_text() {
        let result = sample();
        assert_eq!(to_text(&result, &TextOptions::default()).unwrap(), result.text);
    }

    #[test]
    fn test_to_text_with_headers_skipping_empty() {
        let options = TextOptions::new()
            .with_page_headers(true)
            .with_skip_empty_pages(true);
        let text = to_text(&sample(), &options).unwrap();

        assert_eq!(text, "--- Page 1 ---\nHello, world!\n\n--- Page 3 ---\nBye.");
    }

    #[test]
    fn test_to_text_failure() {
        let result = ExtractionResult::failure("boom");
        let err = to_text(&result, &TextOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Rendering error: extraction failed: boom");
    }
}

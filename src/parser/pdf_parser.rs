//! Extraction context for a single buffer.

use crate::detect::{sniff_header, HeaderKind, HEADER_WINDOW};
use crate::error::{Error, Result};
use crate::model::{ExtractionResult, ResolvedPage};

use super::objects::{decode_latin1, ObjectTable};
use super::options::{ErrorMode, ExtractOptions};
use super::resolver::PageResolver;

/// PDF text extractor for one buffer.
///
/// Each parser builds its own object table and page list, so independent
/// extractions share nothing and can run on different threads.
pub struct PdfParser<'a> {
    data: &'a [u8],
    options: ExtractOptions,
}

impl<'a> PdfParser<'a> {
    /// Create a parser over a byte buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, ExtractOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(data: &'a [u8], options: ExtractOptions) -> Self {
        Self { data, options }
    }

    /// The options in effect.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run the whole pipeline inside one failure boundary.
    ///
    /// Never fails: errors become a `success: false` result with no pages.
    pub fn extract(&self) -> ExtractionResult {
        match self.parse() {
            Ok(pages) => ExtractionResult::from_pages(pages),
            Err(e) => {
                log::warn!("PDF text extraction failed: {}", e);
                ExtractionResult::failure(e.to_string())
            }
        }
    }

    /// Sniff the header, scan objects and resolve pages.
    pub fn parse(&self) -> Result<Vec<ResolvedPage>> {
        self.validate_header()?;
        let table = self.object_table();
        let pages = PageResolver::new(&table, &self.options).resolve();
        log::debug!("Resolved {} pages from {} objects", pages.len(), table.len());
        Ok(pages)
    }

    /// Scan the buffer for objects.
    pub fn object_table(&self) -> ObjectTable {
        ObjectTable::scan(&decode_latin1(self.data))
    }

    /// Check the header; only strict mode treats a mismatch as an error.
    fn validate_header(&self) -> Result<HeaderKind> {
        let kind = sniff_header(self.data);
        if kind.is_recognized() {
            return Ok(kind);
        }

        let window = &self.data[..self.data.len().min(HEADER_WINDOW)];
        log::warn!(
            "Unrecognized PDF header {:?}, scanning anyway",
            decode_latin1(window)
        );

        match self.options.error_mode {
            ErrorMode::Strict => Err(Error::UnknownFormat),
            ErrorMode::Lenient => Ok(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_minimal_page() {
        let data = b"%PDF-1.4\n1 0 obj\n/Type /Page\n/Contents 2 0 R\nendobj\n2 0 obj\nstream\n(Hello) Tj\nendstream\nendobj";
        let result = PdfParser::new(data).extract();

        assert!(result.success);
        assert_eq!(result.num_pages, 1);
        assert!(result.text.contains("Hello"));
    }

    #[test]
    fn test_strict_mode_rejects_bad_header() {
        let data = b"garbage!1 0 obj /Type /Page (Hi) Tj endobj";
        let options = ExtractOptions::new().strict();
        let result = PdfParser::with_options(data, options).extract();

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid PDF file - missing PDF header")
        );
        assert_eq!(result.num_pages, 0);
    }

    #[test]
    fn test_lenient_mode_scans_bad_header() {
        let data = b"garbage!1 0 obj /Type /Page (Hi) Tj endobj";
        let result = PdfParser::new(data).extract();

        assert!(result.success);
        assert_eq!(result.num_pages, 1);
    }

    #[test]
    fn test_out_of_range_object_keeps_other_pages() {
        let data = b"%PDF-1.4\n1 0 obj /Type /Page (Good) Tj endobj\n4294967296 0 obj (x) endobj";
        let result = PdfParser::new(data).extract();

        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.num_pages, 1);
        assert!(result.text.contains("Good"));
    }
}

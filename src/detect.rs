//! PDF header sniffing and version detection.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// ZIP local-file marker, seen on PDFs wrapped by other tools.
const ZIP_MAGIC: &[u8] = b"PK";

/// Number of leading bytes inspected by [`sniff_header`].
pub const HEADER_WINDOW: usize = 8;

/// Outcome of a header sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Starts with `%PDF-`
    Pdf,
    /// Starts with a ZIP local-file marker
    Zip,
    /// Contains `PDF` somewhere in the header window
    Embedded,
    /// None of the above
    Unrecognized,
}

impl HeaderKind {
    /// Whether the header looked like something worth scanning.
    pub fn is_recognized(self) -> bool {
        self != HeaderKind::Unrecognized
    }
}

/// Classify the first [`HEADER_WINDOW`] bytes of a buffer.
///
/// Never fails. Real-world files carry wrapped or re-saved headers yet
/// still have scannable object bodies, so callers decide what to do with
/// an [`HeaderKind::Unrecognized`] result.
pub fn sniff_header(data: &[u8]) -> HeaderKind {
    let window = &data[..data.len().min(HEADER_WINDOW)];

    if window.starts_with(PDF_MAGIC) {
        HeaderKind::Pdf
    } else if window.starts_with(ZIP_MAGIC) {
        HeaderKind::Zip
    } else if window.windows(3).any(|w| w == b"PDF") {
        HeaderKind::Embedded
    } else {
        HeaderKind::Unrecognized
    }
}

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Detect the PDF version from a `%PDF-x.y` header.
///
/// Stricter than [`sniff_header`]: only a standard header yields a version.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnknownFormat);
    }

    Ok(PdfFormat { version })
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes start with a standard PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

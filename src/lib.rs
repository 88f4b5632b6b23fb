//! # pdfscan
//!
//! Tolerant PDF text extraction for PDFs in the wild.
//!
//! pdfscan does not implement the PDF grammar. It scans the raw bytes for
//! `N G obj ... endobj` spans, finds page objects (or, failing that, any
//! object carrying a stream) and pulls text out of `Tj`/`TJ` operators and
//! bracketed runs. Recall wins over precision: text is often found more
//! than once, and compressed streams yield nothing useful.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfscan::extract_text_from_pdf;
//!
//! let data = std::fs::read("resume.pdf").unwrap();
//! let result = extract_text_from_pdf(&data);
//! if result.success {
//!     println!("{} pages", result.num_pages);
//!     println!("{}", result.text);
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **No panics, no errors from the core**: [`extract_text_from_pdf`]
//!   always returns an [`ExtractionResult`]; failures set `success: false`
//! - **Deterministic**: the same bytes give the same result
//! - **Independent calls**: nothing is cached or shared between calls

pub mod detect;
pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, is_pdf_bytes, sniff_header, HeaderKind, PdfFormat};
pub use error::{Error, Result};
pub use input::{decode_base64_pdf, DATA_URL_PREFIX};
pub use model::{Dictionary, ExtractionResult, ObjectKind, RawObject, ResolvedPage};
pub use parser::{ErrorMode, ExtractOptions, ObjectTable, PdfParser, StripMode};
pub use render::{ExtractionStats, JsonFormat, TextOptions};

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Extract text from a PDF buffer.
///
/// Never fails. Header mismatches, missing objects and undecodable
/// streams only reduce the text; a fatal problem (such as an object
/// number that does not fit in 32 bits) yields `success: false`.
///
/// # Example
///
/// ```
/// use pdfscan::extract_text_from_pdf;
///
/// let result = extract_text_from_pdf(b"1 0 obj /Type /Page (Hi) Tj endobj");
/// assert!(result.success);
/// assert_eq!(result.num_pages, 1);
/// ```
pub fn extract_text_from_pdf(data: &[u8]) -> ExtractionResult {
    extract_text_from_pdf_with_options(data, ExtractOptions::default())
}

/// Extract text from a PDF buffer with custom options.
pub fn extract_text_from_pdf_with_options(data: &[u8], options: ExtractOptions) -> ExtractionResult {
    PdfParser::with_options(data, options).extract()
}

/// Extract text from a reader.
///
/// The reader is drained fully before extraction starts. Read failures
/// are returned as errors rather than folded into the result.
///
/// # Example
///
/// ```no_run
/// use pdfscan::extract_text_from_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.pdf").unwrap();
/// let result = extract_text_from_reader(file).unwrap();
/// ```
pub fn extract_text_from_reader<R: Read>(reader: R) -> Result<ExtractionResult> {
    extract_text_from_reader_with_options(reader, ExtractOptions::default())
}

/// Extract text from a reader with custom options.
pub fn extract_text_from_reader_with_options<R: Read>(
    mut reader: R,
    options: ExtractOptions,
) -> Result<ExtractionResult> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(extract_text_from_pdf_with_options(&data, options))
}

/// Extract text from a file.
pub fn extract_text_from_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    extract_text_from_file_with_options(path, ExtractOptions::default())
}

/// Extract text from a file with custom options.
pub fn extract_text_from_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<ExtractionResult> {
    let data = std::fs::read(path)?;
    Ok(extract_text_from_pdf_with_options(&data, options))
}

/// Extract text from a base64 payload or `data:application/pdf;base64,` URL.
///
/// Undecodable base64 yields `success: false` like any other failure.
///
/// # Example
///
/// ```
/// use pdfscan::extract_text_from_base64_pdf;
///
/// let result = extract_text_from_base64_pdf("data:application/pdf;base64,");
/// assert!(result.success);
/// assert_eq!(result.num_pages, 0);
/// ```
pub fn extract_text_from_base64_pdf(payload: &str) -> ExtractionResult {
    extract_text_from_base64_pdf_with_options(payload, ExtractOptions::default())
}

/// Extract text from a base64 payload with custom options.
pub fn extract_text_from_base64_pdf_with_options(
    payload: &str,
    options: ExtractOptions,
) -> ExtractionResult {
    match decode_base64_pdf(payload) {
        Ok(data) => extract_text_from_pdf_with_options(&data, options),
        Err(e) => {
            log::warn!("Could not decode base64 PDF payload: {}", e);
            ExtractionResult::failure(e.to_string())
        }
    }
}

/// Extract text from many buffers.
///
/// Results come back in input order. With `options.parallel` set the
/// buffers are processed on the rayon thread pool.
pub fn extract_batch<B>(buffers: &[B], options: &ExtractOptions) -> Vec<ExtractionResult>
where
    B: AsRef<[u8]> + Sync,
{
    let extract_one = |data: &B| PdfParser::with_options(data.as_ref(), options.clone()).extract();

    if options.parallel {
        buffers.par_iter().map(extract_one).collect()
    } else {
        buffers.iter().map(extract_one).collect()
    }
}

/// Extract text from a file, reading it asynchronously.
#[cfg(feature = "async")]
pub async fn extract_text_from_file_async<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    extract_text_from_file_async_with_options(path, ExtractOptions::default()).await
}

/// Extract text from a file with custom options, reading it asynchronously.
///
/// The read is the only await point; extraction itself runs synchronously
/// on the calling task.
#[cfg(feature = "async")]
pub async fn extract_text_from_file_async_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<ExtractionResult> {
    let data = tokio::fs::read(path).await?;
    Ok(extract_text_from_pdf_with_options(&data, options))
}

/// Extract text from an async reader, draining it fully first.
#[cfg(feature = "async")]
pub async fn extract_text_from_async_reader<R>(
    mut reader: R,
    options: ExtractOptions,
) -> Result<ExtractionResult>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use tokio::io::AsyncReadExt;

    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    Ok(extract_text_from_pdf_with_options(&data, options))
}

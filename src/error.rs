//! Error types for pdfscan library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF text extraction.
///
/// Most malformed input is not an error at all: a bad header, an empty
/// object table or a filtered stream only degrade the extracted text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The header is not recognized as PDF (strict mode only).
    #[error("Invalid PDF file - missing PDF header")]
    UnknownFormat,

    /// The base64 payload could not be decoded.
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

//! JSON rendering for extraction results.

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an extraction result to JSON.
///
/// Field names follow the result envelope (`text`, `pages`, `success`,
/// `error`, `numPages`).
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Compact => serde_json::to_string(result),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

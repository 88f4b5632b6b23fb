//! Rendering of extraction results to JSON and plain text.

mod json;
mod stats;
mod text;

pub use json::{to_json, JsonFormat};
pub use stats::ExtractionStats;
pub use text::{to_text, TextOptions};

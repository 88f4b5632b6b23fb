//! PDF scanning and text decoding.
//!
//! Stages run strictly forward: [`ObjectTable`] scan, [`PageResolver`],
//! then the [`content`] decoder for each page.

pub mod content;
mod objects;
mod options;
mod pdf_parser;
mod resolver;
mod space;
pub mod strings;

pub use objects::{decode_latin1, parse_dictionary, ObjectTable, ScanStrategy};
pub use options::{ErrorMode, ExtractOptions, StripMode};
pub use pdf_parser::PdfParser;
pub use resolver::PageResolver;
pub use space::{is_pdf_space, trim_pdf_space};

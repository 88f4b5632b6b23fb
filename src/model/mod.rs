//! Data model shared by the scanner, resolver and callers.
//!
//! [`RawObject`]s live only for one extraction call; [`ResolvedPage`]s and
//! the [`ExtractionResult`] envelope are what callers get back.

mod object;
mod page;
mod result;

pub use object::{Dictionary, ObjectKind, RawObject};
pub use page::ResolvedPage;
pub use result::{ExtractionResult, PAGE_SEPARATOR};

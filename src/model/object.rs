//! Raw PDF objects as found by the object scanner.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shallow `/Key value` dictionary of an object.
///
/// Values are raw tokens; nested dictionaries and arrays are not expanded.
pub type Dictionary = IndexMap<String, String>;

/// Object classification derived from type markers in the raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Page,
    Pages,
    Catalog,
    Font,
    Stream,
    Unknown,
}

/// Markers checked in priority order; the first hit wins.
const TYPE_MARKERS: [(&str, ObjectKind); 5] = [
    ("/Type /Page", ObjectKind::Page),
    ("/Type /Pages", ObjectKind::Pages),
    ("/Type /Catalog", ObjectKind::Catalog),
    ("/Type /Font", ObjectKind::Font),
    ("stream", ObjectKind::Stream),
];

impl ObjectKind {
    /// Classify raw object content by substring markers.
    ///
    /// `/Type /Pages` also contains `/Type /Page`, so page-tree nodes
    /// written that way classify as [`ObjectKind::Page`].
    pub fn classify(content: &str) -> Self {
        TYPE_MARKERS
            .iter()
            .find(|(marker, _)| content.contains(marker))
            .map(|(_, kind)| *kind)
            .unwrap_or(ObjectKind::Unknown)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ObjectKind::Page => "Page",
            ObjectKind::Pages => "Pages",
            ObjectKind::Catalog => "Catalog",
            ObjectKind::Font => "Font",
            ObjectKind::Stream => "Stream",
            ObjectKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// One `N G obj ... endobj` span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObject {
    /// Object number
    pub id: u32,

    /// Generation number
    pub generation: u32,

    /// Classification from type markers
    pub kind: ObjectKind,

    /// Untouched content between `obj` and `endobj`, one char per byte
    pub raw_content: String,

    /// Shallow dictionary parsed from the content
    pub dictionary: Dictionary,
}

impl RawObject {
    /// Table key for an object number and generation.
    pub fn key_for(id: u32, generation: u32) -> String {
        format!("{}_{}", id, generation)
    }

    /// Table key of this object.
    pub fn key(&self) -> String {
        Self::key_for(self.id, self.generation)
    }

    /// Whether the raw content mentions the `stream` keyword.
    pub fn has_stream(&self) -> bool {
        self.raw_content.contains("stream")
    }
}

//! Object table built by scanning the buffer for `obj ... endobj` spans.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::space::{space_regex, trim_pdf_space};
use crate::model::{Dictionary, ObjectKind, RawObject};

static XREF_HEADER: Lazy<Regex> = Lazy::new(|| space_regex(r"xref\s+([0-9]+)\s+([0-9]+)"));

static OBJECT_SPAN: Lazy<Regex> =
    Lazy::new(|| space_regex(r"(?s)([0-9]+)\s+([0-9]+)\s+obj\s*(.*?)\s*endobj"));

static DICT_ENTRY: Lazy<Regex> = Lazy::new(|| space_regex(r"/([0-9A-Za-z_]+)\s+([^/\s]+)"));

/// Decode bytes one char per byte (Latin-1).
///
/// Stream payloads are arbitrary binary, so UTF-8 decoding would corrupt
/// or reject them. Every byte maps to exactly one char here.
pub fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| b as char).collect()
}

/// How objects were located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    /// An xref section header was present
    CrossReference,
    /// No xref section was found
    Direct,
}

/// Objects keyed by `"{id}_{generation}"`, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    objects: IndexMap<String, RawObject>,
    strategy: Option<ScanStrategy>,
}

impl ObjectTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan decoded buffer content for objects.
    ///
    /// The xref table is detected but its offsets are not followed: both
    /// strategies run the same direct scan, so the result only depends on
    /// object bodies being findable by pattern. Anything that does not
    /// match the span pattern is left out, as is a span whose object number
    /// or generation overflows `u32`.
    pub fn scan(content: &str) -> Self {
        let strategy = match XREF_HEADER.captures(content) {
            Some(caps) => {
                log::debug!(
                    "Found xref section (start {}, count {}), using cross-reference strategy",
                    &caps[1],
                    &caps[2]
                );
                ScanStrategy::CrossReference
            }
            None => ScanStrategy::Direct,
        };

        let mut table = Self {
            objects: IndexMap::new(),
            strategy: Some(strategy),
        };

        match strategy {
            ScanStrategy::CrossReference => table.scan_xref_objects(content),
            ScanStrategy::Direct => table.scan_direct_objects(content),
        }

        log::debug!("Object table holds {} objects", table.len());
        table
    }

    /// Scan raw bytes for objects.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::scan(&decode_latin1(data))
    }

    fn scan_xref_objects(&mut self, content: &str) {
        // Offsets are not honored; object bodies are found by pattern.
        self.scan_direct_objects(content)
    }

    fn scan_direct_objects(&mut self, content: &str) {
        for caps in OBJECT_SPAN.captures_iter(content) {
            match parse_object(&caps) {
                Some(object) => {
                    self.insert(object);
                }
                None => log::debug!(
                    "Skipping object {} {}: number out of range",
                    &caps[1],
                    &caps[2]
                ),
            }
        }
    }

    /// Insert an object; a recurring key replaces the earlier object but
    /// keeps its position.
    pub fn insert(&mut self, object: RawObject) -> Option<RawObject> {
        let key = object.key();
        let previous = self.objects.insert(key, object);
        if let Some(prev) = &previous {
            log::debug!(
                "Object {} {} appears more than once, keeping the later one",
                prev.id,
                prev.generation
            );
        }
        previous
    }

    /// Look up an object by number and generation.
    pub fn get(&self, id: u32, generation: u32) -> Option<&RawObject> {
        self.objects.get(&RawObject::key_for(id, generation))
    }

    /// First object in discovery order with this number, any generation.
    pub fn find_by_id(&self, id: u32) -> Option<&RawObject> {
        self.objects.values().find(|obj| obj.id == id)
    }

    /// Iterate objects in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &RawObject> {
        self.objects.values()
    }

    /// Strategy selected by the last scan, if any.
    pub fn strategy(&self) -> Option<ScanStrategy> {
        self.strategy
    }

    /// Whether an xref section header was seen.
    pub fn has_xref(&self) -> bool {
        self.strategy == Some(ScanStrategy::CrossReference)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if no objects were found.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

fn parse_object(caps: &Captures<'_>) -> Option<RawObject> {
    let id = caps[1].parse().ok()?;
    let generation = caps[2].parse().ok()?;
    let content = &caps[3];

    Some(RawObject {
        id,
        generation,
        kind: ObjectKind::classify(content),
        raw_content: content.to_string(),
        dictionary: parse_dictionary(content),
    })
}

/// Shallow `/Key value` scan; later keys overwrite earlier ones.
pub fn parse_dictionary(content: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    for caps in DICT_ENTRY.captures_iter(content) {
        dict.insert(caps[1].to_string(), trim_pdf_space(&caps[2]).to_string());
    }
    dict
}

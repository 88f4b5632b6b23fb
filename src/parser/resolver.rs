//! Page and stream resolution over the object table.

use once_cell::sync::Lazy;
use regex::Regex;

use super::content::decode_content;
use super::objects::ObjectTable;
use super::options::ExtractOptions;
use super::space::{space_regex, trim_pdf_space};
use crate::model::{ObjectKind, RawObject, ResolvedPage};

static CONTENTS_REF: Lazy<Regex> = Lazy::new(|| space_regex(r"/Contents\s+([0-9]+)"));

/// Turns an object table into numbered pages of decoded text.
pub struct PageResolver<'a> {
    table: &'a ObjectTable,
    options: &'a ExtractOptions,
}

impl<'a> PageResolver<'a> {
    /// Create a resolver over a scanned table.
    pub fn new(table: &'a ObjectTable, options: &'a ExtractOptions) -> Self {
        Self { table, options }
    }

    /// Resolve pages in discovery order.
    ///
    /// Page objects come first; if there are none, every stream-bearing
    /// object that yields text stands in for a page.
    pub fn resolve(&self) -> Vec<ResolvedPage> {
        let pages = self.resolve_page_objects();
        if !pages.is_empty() {
            return pages;
        }

        log::debug!("No page objects found, falling back to stream objects");
        self.resolve_streams()
    }

    fn resolve_page_objects(&self) -> Vec<ResolvedPage> {
        self.table
            .iter()
            .filter(|obj| obj.kind == ObjectKind::Page)
            .zip(1u32..)
            .map(|(obj, number)| {
                ResolvedPage::new(number, self.page_text(obj), obj.dictionary.clone())
            })
            .collect()
    }

    fn resolve_streams(&self) -> Vec<ResolvedPage> {
        self.table
            .iter()
            .filter(|obj| obj.kind == ObjectKind::Stream || obj.has_stream())
            .filter_map(|obj| {
                let text = decode_content(&obj.raw_content, self.options);
                (!trim_pdf_space(&text).is_empty()).then(|| (obj, text))
            })
            .zip(1u32..)
            .map(|((obj, text), number)| ResolvedPage::new(number, text, obj.dictionary.clone()))
            .collect()
    }

    /// Text of a page object: its referenced content stream, followed by
    /// whatever the page object itself yields.
    pub fn page_text(&self, page: &RawObject) -> String {
        let mut text = self
            .contents_of(page)
            .map(|contents| decode_content(&contents.raw_content, self.options))
            .unwrap_or_default();

        let direct = decode_content(&page.raw_content, self.options);
        if !direct.is_empty() {
            text.push_str(&direct);
        }

        text
    }

    /// The object named by the page's `/Contents` reference.
    ///
    /// Only the object number is used; the first object with that number
    /// wins regardless of generation.
    fn contents_of(&self, page: &RawObject) -> Option<&'a RawObject> {
        let caps = CONTENTS_REF.captures(&page.raw_content)?;
        let id = caps[1].parse::<u32>().ok()?;
        let found = self.table.find_by_id(id);
        if found.is_none() {
            log::debug!("Page {} references missing contents object {}", page.id, id);
        }
        found
    }
}

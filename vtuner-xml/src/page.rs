//! Menu pages and document encoding.

use crate::constants::{
    LINE_BREAK, NO_DATA_CACHE_VALUE, TAG_ITEM_COUNT, TAG_LIST_OF_ITEMS, TAG_NO_DATA_CACHE,
    UNKNOWN_COUNT, XML_HEADER,
};
use crate::element::push_text;
use crate::error::{RenderError, RenderResult};
use crate::item::Item;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xmltree::{Element, EmitterConfig, XMLNode};

/// One menu screen: ordered items plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Items in display order
    #[serde(default)]
    pub items: Vec<Item>,
    /// Declared total item count, `-1` when unspecified
    #[serde(default = "unknown_count")]
    pub count: i64,
    /// Ask the receiver not to cache this page
    #[serde(default)]
    pub dont_cache: bool,
}

fn unknown_count() -> i64 {
    UNKNOWN_COUNT
}

impl Default for Page {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: UNKNOWN_COUNT,
            dont_cache: false,
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    pub fn set_dont_cache(&mut self, dont_cache: bool) {
        self.dont_cache = dont_cache;
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_dont_cache(mut self, dont_cache: bool) -> Self {
        self.dont_cache = dont_cache;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build the `<ListOfItems>` element tree
    pub fn to_xml(&self) -> RenderResult<Element> {
        let mut root = Element::new(TAG_LIST_OF_ITEMS);
        push_text(&mut root, TAG_ITEM_COUNT, &self.count.to_string())?;
        if self.dont_cache {
            push_text(&mut root, TAG_NO_DATA_CACHE, NO_DATA_CACHE_VALUE)?;
        }
        for item in &self.items {
            root.children.push(XMLNode::Element(item.to_xml()?));
        }
        Ok(root)
    }

    /// Render the complete response body
    ///
    /// The XML declaration is followed by one tag per line, lines separated
    /// by CRLF. Line breaks are substituted over the fully serialized
    /// document so nested boundaries are split the same way as top-level ones.
    pub fn render(&self) -> RenderResult<String> {
        let root = self.to_xml()?;

        let config = EmitterConfig::new()
            .write_document_declaration(false)
            .perform_indent(false);
        let mut buffer = Vec::new();
        root.write_with_config(&mut buffer, config)
            .map_err(|e| RenderError::Serialization(e.to_string()))?;
        let body = String::from_utf8(buffer).map_err(|e| RenderError::Encoding(e.to_string()))?;

        let document = format!("{XML_HEADER}{body}").replace("><", &format!(">{LINE_BREAK}<"));
        debug!(items = self.items.len(), count = self.count, "Rendered page:\n{}", document);
        Ok(document)
    }
}

impl Extend<Item> for Page {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<Item> for Page {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut page = Page::new();
        page.extend(iter);
        page
    }
}

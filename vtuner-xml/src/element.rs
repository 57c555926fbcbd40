//! Element tree helpers shared by item and page rendering.

use crate::error::{RenderError, RenderResult};
use xmltree::{Element, XMLNode};

/// Append `<tag>text</tag>` to `parent`.
///
/// An empty `text` yields a self-closed `<tag />`. Characters XML 1.0 cannot
/// carry are rejected instead of being written.
pub(crate) fn push_text(parent: &mut Element, tag: &str, text: &str) -> RenderResult<()> {
    if let Some(character) = text.chars().find(|c| !is_xml_char(*c)) {
        return Err(RenderError::InvalidCharacter {
            tag: tag.to_string(),
            character,
        });
    }

    let mut child = Element::new(tag);
    if !text.is_empty() {
        child.children.push(XMLNode::Text(text.to_string()));
    }
    parent.children.push(XMLNode::Element(child));
    Ok(())
}

/// Append an empty `<tag />` to `parent`.
pub(crate) fn push_empty(parent: &mut Element, tag: &str) {
    parent.children.push(XMLNode::Element(Element::new(tag)));
}

/// XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

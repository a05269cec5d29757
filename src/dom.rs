//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate so the extractors speak in terms of
//! nodes, tag names and attributes rather than the parser's own API.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Character references (`&amp;`, `&#160;`, ...) are decoded by the parser.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Compile a CSS selector once so it can be reused.
pub fn compile_selector(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|err| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    })
}

// === Tag/Node Information ===

/// Tag name of an element node; `None` for text, comments and the document.
#[inline]
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Whether the node's direct parent is an element named `tag` (ASCII
/// case-insensitive).
#[must_use]
pub fn parent_is(node: &NodeRef, tag: &str) -> bool {
    node.parent()
        .and_then(|parent| tag_name(&parent))
        .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Non-empty attribute value.
#[inline]
#[must_use]
pub fn non_empty_attribute(node: &NodeRef, name: &str) -> Option<StrTendril> {
    node.attr(name).filter(|value| !value.is_empty())
}

// === Tree Navigation ===

/// Where rendering of a whole document starts: the `body` element, or the
/// document root if there is none.
#[must_use]
pub fn body_or_root(doc: &Document) -> NodeRef<'_> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .unwrap_or_else(|| doc.root())
}

/// First element in document order matching `selector`.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, matcher: &Matcher) -> Option<NodeRef<'a>> {
    doc.select_matcher(matcher).nodes().first().copied()
}

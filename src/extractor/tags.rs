//! Tag classification for text extraction.
//!
//! Every element falls into exactly one class: skipped, line break, table
//! cell, block, or (by default) inline. Arrays are kept for iteration and
//! mirrored into `HashSet`s for O(1) lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Elements whose whole subtree never contributes text.
pub static SKIP_TAGS: [&str; 11] = [
    "script", "style", "noscript", "template", "canvas", "svg", "math", "iframe", "object",
    "embed", "head",
];

/// Elements rendered on their own line.
pub static BLOCK_TAGS: [&str; 45] = [
    // sectioning
    "address", "article", "aside", "footer", "header", "hgroup", "main", "nav", "section",
    // headings and text blocks
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "blockquote", "hr", "div", "figure",
    "figcaption", "details", "summary", "dialog",
    // lists
    "ul", "ol", "li", "dl", "dt", "dd",
    // tables
    "table", "caption", "thead", "tbody", "tfoot", "tr",
    // forms
    "form", "fieldset", "legend", "select", "option", "textarea",
    // legacy
    "center", "listing",
];

/// Elements that emit a single line break.
pub static LINE_BREAK_TAGS: [&str; 1] = ["br"];

/// Table cells, followed by a tab.
pub static CELL_TAGS: [&str; 2] = ["td", "th"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `SKIP_TAGS` as a `HashSet`
pub static SKIP_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKIP_TAGS.into_iter().collect());

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `LINE_BREAK_TAGS` as a `HashSet`
pub static LINE_BREAK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LINE_BREAK_TAGS.into_iter().collect());

/// `CELL_TAGS` as a `HashSet`
pub static CELL_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CELL_TAGS.into_iter().collect());

/// How an element shapes the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// Subtree is dropped.
    Skip,
    /// Emits `\n`, children ignored.
    LineBreak,
    /// Children, then `\t`.
    Cell,
    /// `\n` boundary before and after children.
    Block,
    /// Children in place.
    Inline,
}

/// Classify a tag name. Matching is ASCII case-insensitive.
///
/// # Examples
/// ```
/// use rs_pagetext::extractor::tags::{classify, TagClass};
///
/// assert_eq!(classify("SCRIPT"), TagClass::Skip);
/// assert_eq!(classify("p"), TagClass::Block);
/// assert_eq!(classify("span"), TagClass::Inline);
/// ```
#[must_use]
pub fn classify(tag: &str) -> TagClass {
    let lower;
    let tag = if tag.bytes().any(|b| b.is_ascii_uppercase()) {
        lower = tag.to_ascii_lowercase();
        lower.as_str()
    } else {
        tag
    };

    if SKIP_TAG_SET.contains(tag) {
        TagClass::Skip
    } else if LINE_BREAK_TAG_SET.contains(tag) {
        TagClass::LineBreak
    } else if CELL_TAG_SET.contains(tag) {
        TagClass::Cell
    } else if BLOCK_TAG_SET.contains(tag) {
        TagClass::Block
    } else {
        TagClass::Inline
    }
}

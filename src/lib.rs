//! # rs-pagetext
//!
//! Plain text and hyperlinks from HTML documents.
//!
//! Two independent operations over a parsed document:
//!
//! - **Text extraction** renders the tree as the text a reader would get by
//!   selecting the whole page and copying it: collapsed whitespace, one line
//!   per block element, tab-separated table cells, no scripts or styles.
//! - **Link extraction** reads link targets from selected elements and
//!   returns them as absolute URLs, honouring `<base href>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_pagetext::{extract_links_from_html, extract_text, LinkOptions};
//!
//! let html = r#"<html><body>
//!   <h1>Release notes</h1>
//!   <p>Read the <a href="/changelog">full changelog</a>.</p>
//! </body></html>"#;
//!
//! assert_eq!(extract_text(html), "Release notes\nRead the full changelog.");
//!
//! let options = LinkOptions::default().with_base_url("https://example.com/");
//! let links = extract_links_from_html(html, &options)?;
//! assert_eq!(links, ["https://example.com/changelog"]);
//! # Ok::<(), rs_pagetext::Error>(())
//! ```
//!
//! Both operations are pure functions of their input: nothing is fetched,
//! cached or mutated, so they can be called from any number of threads.

mod error;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Text and link extraction (tag classification, renderers).
pub mod extractor;

/// URL utilities for scheme detection and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::{
    extract_links, extract_links_from_html, extract_text, extract_text_from_document,
    extract_text_from_selection,
};
pub use options::LinkOptions;

/// Extracts plain text from HTML bytes with automatic encoding detection.
///
/// The charset is taken from a byte-order mark or a `<meta>` declaration,
/// defaulting to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_pagetext::extract_text_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// assert_eq!(extract_text_bytes(html), "Café");
/// ```
#[must_use]
pub fn extract_text_bytes(html: &[u8]) -> String {
    extract_text(&encoding::decode_html(html))
}

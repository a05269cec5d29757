//! Extraction over a parsed document tree.
//!
//! # Module Structure
//!
//! - `tags`: Tag classification (skip, block, line break, cell, inline)
//! - `text`: Plain-text rendering
//! - `links`: Link collection and resolution
//!
//! # Usage
//!
//! ```rust
//! use rs_pagetext::dom;
//! use rs_pagetext::extractor::{links, text};
//! use rs_pagetext::LinkOptions;
//!
//! let doc = dom::parse(r#"<p>See <a href="https://example.com/">this</a>.</p>"#);
//!
//! assert_eq!(text::extract_text_from_document(&doc), "See this.");
//! assert_eq!(
//!     links::extract_links(&doc, &LinkOptions::default())?,
//!     ["https://example.com/"]
//! );
//! # Ok::<(), rs_pagetext::Error>(())
//! ```

pub mod links;
pub mod tags;
pub mod text;

pub use links::{extract_links, extract_links_from_html};
pub use text::{extract_text, extract_text_from_document, extract_text_from_selection};

//! Configuration options for link extraction.
//!
//! Text extraction takes no options. `LinkOptions` controls which elements
//! are read and how relative targets are resolved.

use serde::{Deserialize, Serialize};

/// Configuration options for link extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings (every `<a href>` in the document, no base URL).
///
/// Options also deserialize from JSON, with missing fields taking their
/// defaults.
///
/// # Example
///
/// ```rust
/// use rs_pagetext::LinkOptions;
///
/// let options = LinkOptions {
///     base_url: "https://example.com/blog/".to_string(),
///     ..LinkOptions::default()
/// };
/// assert_eq!(options.selector, "a");
///
/// let options = LinkOptions::default()
///     .with_selector("img")
///     .with_attribute("src");
/// assert_eq!(options.attribute, "src");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// CSS selector choosing which elements to read.
    ///
    /// Default: `"a"`
    pub selector: String,

    /// URL that relative targets are resolved against.
    ///
    /// A `<base href>` in the document takes precedence when it resolves.
    /// Empty means "none"; relative targets then fail the call.
    ///
    /// Default: `""`
    pub base_url: String,

    /// Attribute holding the link target.
    ///
    /// Default: `"href"`
    pub attribute: String,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            selector: "a".to_string(),
            base_url: String::new(),
            attribute: "href".to_string(),
        }
    }
}

impl LinkOptions {
    /// Replace the element selector.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Replace the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the attribute the target is read from.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

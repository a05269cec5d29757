//! URL Utility Functions
//!
//! Scheme detection and relative-reference resolution used by the link
//! extractor. Joining is delegated to the `url` crate.

use url::Url;

use crate::patterns::URI_SCHEME;

/// Check whether a link value already carries a URI scheme.
///
/// Only the prefix is inspected; `mailto:`, `javascript:` and custom schemes
/// all count as absolute. Protocol-relative references (`//host/path`) do not.
///
/// # Examples
/// ```
/// use rs_pagetext::url_utils::has_scheme;
///
/// assert!(has_scheme("https://example.com"));
/// assert!(has_scheme("mailto:a@b.com"));
/// assert!(!has_scheme("/relative/path"));
/// assert!(!has_scheme("//cdn.example.com/lib.js"));
/// ```
#[must_use]
pub fn has_scheme(s: &str) -> bool {
    URI_SCHEME.is_match(s)
}

/// Resolve `reference` against `base`, returning the absolute URL.
///
/// An empty or unparseable `base` still lets an absolute `reference` through
/// (it is parsed on its own). Returns `None` when no absolute URL can be
/// produced.
///
/// # Examples
/// ```
/// use rs_pagetext::url_utils::join_url;
///
/// assert_eq!(
///     join_url("../b", "https://example.com/a/c/").as_deref(),
///     Some("https://example.com/a/b")
/// );
/// assert_eq!(join_url("/x", ""), None);
/// ```
#[must_use]
pub fn join_url(reference: &str, base: &str) -> Option<String> {
    let resolved = match Url::parse(base) {
        Ok(base) => base.join(reference),
        Err(_) => Url::parse(reference),
    };

    resolved.ok().map(String::from)
}

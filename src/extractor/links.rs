//! Hyperlink extraction.
//!
//! Reads a link attribute from every element matching a selector and turns
//! each value into an absolute URL. A `<base href>` in the document, when it
//! resolves, replaces the caller's base URL for the whole call.

use std::borrow::Cow;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::LinkOptions;
use crate::url_utils::{has_scheme, join_url};

/// Extract absolute link targets from a parsed document.
///
/// Targets come back in document order. Elements without the attribute, or
/// with an empty value, are skipped, as are relative targets that fail to
/// resolve. Values that already carry a scheme are returned untouched.
///
/// # Errors
///
/// - [`Error::InvalidSelector`] if `options.selector` does not parse.
/// - [`Error::RelativeUrlWithoutBase`] on the first relative target when
///   neither `options.base_url` nor a `<base href>` provides a base. No links
///   are returned in that case.
///
/// # Example
///
/// ```rust
/// use rs_pagetext::{dom, extract_links, LinkOptions};
///
/// let doc = dom::parse(r#"<a href="/docs">Docs</a> <a href="mailto:hi@example.com">Mail</a>"#);
/// let options = LinkOptions::default().with_base_url("https://example.com/en/");
///
/// let links = extract_links(&doc, &options)?;
/// assert_eq!(links, ["https://example.com/docs", "mailto:hi@example.com"]);
/// # Ok::<(), rs_pagetext::Error>(())
/// ```
pub fn extract_links(doc: &Document, options: &LinkOptions) -> Result<Vec<String>> {
    let matcher = dom::compile_selector(&options.selector)?;
    let base_url = effective_base_url(doc, &options.base_url);

    let matched = doc.select_matcher(&matcher);
    let mut links = Vec::with_capacity(matched.length());

    for node in matched.nodes() {
        let Some(href) = dom::non_empty_attribute(node, &options.attribute) else {
            continue;
        };

        if has_scheme(&href) {
            links.push(href.to_string());
            continue;
        }

        if base_url.is_empty() {
            return Err(Error::RelativeUrlWithoutBase {
                href: href.to_string(),
            });
        }

        match join_url(&href, &base_url) {
            Some(url) => links.push(url),
            None => tracing::trace!(href = %href, base_url = %base_url, "dropping unresolvable link"),
        }
    }

    tracing::debug!(
        selector = %options.selector,
        matched = matched.length(),
        links = links.len(),
        "extracted links"
    );

    Ok(links)
}

/// Parse `html` and extract its links.
///
/// # Errors
///
/// Same as [`extract_links`].
pub fn extract_links_from_html(html: &str, options: &LinkOptions) -> Result<Vec<String>> {
    extract_links(&dom::parse(html), options)
}

/// The base URL in force for this document: its first `<base href>` resolved
/// against `supplied`, or `supplied` itself when there is no such element or
/// it does not resolve.
fn effective_base_url<'a>(doc: &Document, supplied: &'a str) -> Cow<'a, str> {
    let base_href = dom::compile_selector("base[href]")
        .ok()
        .and_then(|matcher| dom::first_match(doc, &matcher))
        .and_then(|base| dom::non_empty_attribute(&base, "href"));

    let Some(base_href) = base_href else {
        return Cow::Borrowed(supplied);
    };

    match join_url(&base_href, supplied) {
        Some(resolved) => {
            tracing::trace!(base_href = %base_href, resolved = %resolved, "document <base> overrides base URL");
            Cow::Owned(resolved)
        }
        None => Cow::Borrowed(supplied),
    }
}

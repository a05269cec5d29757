//! Compiled regex patterns for text normalization and URL classification.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a run of one or more whitespace characters: Unicode `White_Space`
/// (so non-breaking spaces collapse too) plus the zero-width no-break space
/// U+FEFF, which browsers also treat as collapsible.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("WHITESPACE_RUN regex"));

/// Character-level twin of [`WHITESPACE_RUN`].
#[must_use]
pub fn is_collapsible_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Matches a leading URI scheme such as `https:`, `mailto:` or `svn+ssh:`.
///
/// A value matching this is treated as absolute and never needs a base URL.
pub static URI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("URI_SCHEME regex"));

/// Matches `<meta charset="...">`.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("CHARSET_META regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_run_collapses_mixed_whitespace() {
        let result = WHITESPACE_RUN.replace_all("a \t\n b\u{a0}\u{a0}c", " ");
        assert_eq!(result, "a b c");
    }

    #[test]
    fn whitespace_run_includes_byte_order_mark() {
        let result = WHITESPACE_RUN.replace_all("a\u{feff} \u{feff}b", " ");
        assert_eq!(result, "a b");
        assert!(is_collapsible_whitespace('\u{feff}'));
        assert!(is_collapsible_whitespace('\n'));
        assert!(!is_collapsible_whitespace('x'));
    }

    #[test]
    fn uri_scheme_accepts_common_schemes() {
        for s in [
            "http://x",
            "HTTPS://x",
            "mailto:a@b.com",
            "tel:+1",
            "svn+ssh://host",
            "x-custom.v2:thing",
        ] {
            assert!(URI_SCHEME.is_match(s), "{s} should have a scheme");
        }
    }

    #[test]
    fn uri_scheme_rejects_relative_references() {
        for s in ["/x", "x/y", "//cdn.example.com/a.js", "?q=1", "#top", "1http://x", ""] {
            assert!(!URI_SCHEME.is_match(s), "{s} should not have a scheme");
        }
    }

    #[test]
    fn charset_meta_captures_label() {
        let caps = CHARSET_META.captures(r#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#);
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("ISO-8859-1"));

        let caps = CHARSET_META.captures("<META CHARSET=utf-8>");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("utf-8"));
    }
}

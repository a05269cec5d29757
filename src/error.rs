//! Error types for rs-pagetext.
//!
//! Text extraction never fails; only link extraction returns these.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A link target is relative and neither the caller nor a `<base>`
    /// element supplied a URL to resolve it against.
    #[error("relative URL {href:?} cannot be resolved: a base URL is required (pass one or add a <base href> to the document)")]
    RelativeUrlWithoutBase {
        /// The offending attribute value, as written in the document.
        href: String,
    },

    /// The CSS selector used to find link elements could not be parsed.
    #[error("invalid CSS selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The selector as supplied.
        selector: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_url_message_names_the_href() {
        let err = Error::RelativeUrlWithoutBase {
            href: "/about".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"/about\""));
        assert!(msg.contains("base URL is required"));
    }

    #[test]
    fn invalid_selector_message_includes_reason() {
        let err = Error::InvalidSelector {
            selector: "a[".to_string(),
            reason: "unexpected end of input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid CSS selector \"a[\": unexpected end of input"
        );
    }
}

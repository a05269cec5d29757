//! Character encoding sniffing for raw HTML bytes.
//!
//! Pages fetched off the wire are not always UTF-8. Before text extraction
//! the bytes are decoded using, in order: a byte-order mark, a charset
//! declared in a `<meta>` tag within the first 1024 bytes, or UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::CHARSET_META;

/// How far into the document a `<meta>` charset declaration is looked for.
const PRESCAN_LIMIT: usize = 1024;

/// Determine which encoding `html` should be decoded with.
///
/// Unknown labels in `<meta>` are ignored and fall through to UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(PRESCAN_LIMIT)]);
    CHARSET_META
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        // a meta tag was readable as ASCII, so a UTF-16 label is wrong
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than errors, and a leading BOM is
/// removed. Valid UTF-8 input is borrowed without copying.
///
/// # Examples
///
/// ```
/// use rs_pagetext::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = sniff_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);

    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences while decoding");
    }

    decoded
}

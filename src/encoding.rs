//! Character encoding detection and transcoding.
//!
//! Storefront pages are served as UTF-8, but saved copies and mirrors are not
//! always. The charset is read from the page's own meta declaration.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` and `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Detect the character encoding declared in the first bytes of a page.
///
/// Defaults to UTF-8 when nothing usable is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_play_listing::encoding::transcode_to_utf8;
///
/// let html = b"<html><meta charset=\"ISO-8859-1\"><h1>Caf\xE9</h1></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

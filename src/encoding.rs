//! Character encoding detection and transcoding for the bytes entry point.
//!
//! Upstream scrapers often hand over raw response bodies. This module
//! sniffs the charset declaration from the document head and converts the
//! bytes to UTF-8 before parsing, replacing invalid sequences with the
//! Unicode replacement character rather than failing.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches `<meta charset="...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Matches `<meta http-equiv="Content-Type" content="...; charset=...">`.
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Charset declarations are expected near the top of the document.
const SNIFF_LIMIT: usize = 1024;

/// Detect the document encoding from meta declarations, defaulting to
/// UTF-8 when none is found or the label is unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    for pattern in [&META_CHARSET, &HTTP_EQUIV_CHARSET] {
        if let Some(label) = pattern.captures(&head).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Convert raw HTML bytes to a UTF-8 string, lossily.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

//! Compiled regex patterns shared across the crate.
//!
//! Patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of whitespace, including newlines and tabs.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Collapse runs of whitespace to a single space and trim the ends.
///
/// Applied to every string field of the result except raw URLs and
/// timestamps, which pass through verbatim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

//! URL utilities for href and image-source resolution.
//!
//! Resolution mirrors what a browser does for `a.href` and `img.src`:
//! relative references are joined against the document's own URL. Anything
//! that cannot be resolved is reported as `None` so callers can skip the
//! item and keep going.

use url::Url;

/// Parse the document's own URL into a resolution base.
///
/// Returns `None` for empty or unparseable input, or for URLs without a
/// host. A missing base disables relative resolution but never fails the
/// extraction pass.
#[must_use]
pub fn parse_base_url(url: &str) -> Option<Url> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    Url::parse(url).ok().filter(|parsed| parsed.host().is_some())
}

/// Resolve an href or image source to an absolute URL.
///
/// With a base, relative references are joined against it; without one,
/// only already-absolute references resolve. Unresolvable input yields
/// `None`.
#[must_use]
pub fn resolve_reference(reference: &str, base: Option<&Url>) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    match base {
        Some(base) => base.join(reference).ok(),
        None => Url::parse(reference).ok(),
    }
}

/// Serialized origin of a URL, e.g. `https://example.com`.
///
/// Opaque origins (mailto:, data:) serialize as `null`.
#[must_use]
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

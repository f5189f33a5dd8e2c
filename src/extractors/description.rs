//! Description resolution.

use crate::dom::TreeNode;
use crate::patterns;

/// Resolve the meta description; empty string when absent.
///
/// The `name` attribute is matched case-insensitively, so both
/// `name="description"` and `name="Description"` are honored. The first
/// matching meta tag in document order wins.
#[must_use]
pub fn resolve_description<N: TreeNode>(root: &N) -> String {
    root.find_all("meta")
        .iter()
        .find(|meta| {
            meta.attribute("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|meta| meta.attribute("content"))
        .map(|content| patterns::collapse_whitespace(&content))
        .unwrap_or_default()
}

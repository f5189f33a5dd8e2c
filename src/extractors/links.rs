//! External link collection, scoped to the whole document.

use std::collections::HashSet;

use url::Url;

use crate::dom::TreeNode;
use crate::url_utils;

/// Collect off-site links from every anchor in the document.
///
/// Hrefs resolve against the document URL; anchors that cannot be resolved
/// are filter-mapped away rather than failing the pass. A link is kept
/// only if it has not been collected yet (first occurrence wins, order
/// preserved) and the document's own URL does not contain the link's
/// serialized origin.
///
/// The origin test is deliberately a substring containment check against
/// the full document URL, not strict origin equality. One consequence:
/// every relative href resolves onto the document's own origin and is
/// excluded here.
#[must_use]
pub fn collect_links<N: TreeNode>(root: &N, document_url: &str, base: Option<&Url>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in root.find_all("a") {
        let Some(href) = anchor.attribute("href") else {
            continue;
        };
        let Some(resolved) = url_utils::resolve_reference(&href, base) else {
            continue;
        };

        if document_url.contains(&url_utils::origin_of(&resolved)) {
            continue;
        }

        let link = resolved.to_string();
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

//! Image collection, scoped to the located content element.

use std::collections::HashSet;

use url::Url;

use crate::dom::TreeNode;
use crate::url_utils;

/// Collect the resolved source URL of every image under the content
/// element, in document order, deduplicated by exact URL string with the
/// first occurrence kept.
///
/// Sources that cannot be resolved against the document URL are kept in
/// their raw form rather than dropped; empty sources are skipped.
#[must_use]
pub fn collect_images<N: TreeNode>(content: &N, base: Option<&Url>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for img in content.find_all("img") {
        let Some(src) = img.attribute("src") else {
            continue;
        };
        if src.trim().is_empty() {
            continue;
        }

        let resolved = url_utils::resolve_reference(&src, base)
            .map_or_else(|| src.trim().to_string(), |url| url.to_string());

        if seen.insert(resolved.clone()) {
            images.push(resolved);
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn duplicate_sources_collapse_to_first() {
        let doc = dom::parse(
            r#"<body><article>
                 <img src="https://x/a.png">
                 <img src="https://x/a.png">
               </article></body>"#,
        );
        let article = doc.select("article");

        assert_eq!(collect_images(&article, None), vec!["https://x/a.png"]);
    }

    #[test]
    fn preserves_insertion_order() {
        let doc = dom::parse(
            r#"<body><article>
                 <img src="https://x/b.png">
                 <img src="https://x/a.png">
                 <img src="https://x/b.png">
               </article></body>"#,
        );
        let article = doc.select("article");

        assert_eq!(
            collect_images(&article, None),
            vec!["https://x/b.png", "https://x/a.png"]
        );
    }

    #[test]
    fn relative_sources_resolve_against_base() {
        let doc = dom::parse(r#"<body><article><img src="/img/pic.png"></article></body>"#);
        let article = doc.select("article");
        let base = Url::parse("https://example.com/post").unwrap();

        assert_eq!(
            collect_images(&article, Some(&base)),
            vec!["https://example.com/img/pic.png"]
        );
    }

    #[test]
    fn empty_sources_are_skipped() {
        let doc = dom::parse(r#"<body><article><img src=""><img alt="no src"></article></body>"#);
        let article = doc.select("article");

        assert!(collect_images(&article, None).is_empty());
    }
}

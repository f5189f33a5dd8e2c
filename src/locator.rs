//! Content element location.
//!
//! Picks the single element holding the primary readable content: the
//! first `article` anywhere under the body, else the first `main`, else
//! the body itself. First structural match at each tier wins, in document
//! order; there is no scoring or candidate comparison.

use crate::dom::TreeNode;

/// Locate the content element for a document body.
///
/// Never returns "nothing": when neither tier matches, the body itself is
/// the content element.
#[must_use]
pub fn locate_content<N: TreeNode>(body: &N) -> N {
    body.find_first("article")
        .or_else(|| body.find_first("main"))
        .unwrap_or_else(|| body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn article_wins_over_main() {
        let doc = dom::parse(
            "<body><main><p>main text</p></main><article><p>article text</p></article></body>",
        );
        let body = doc.select("body");

        let content = locate_content(&body);
        assert_eq!(content.text_content().trim(), "article text");
    }

    #[test]
    fn main_wins_when_no_article() {
        let doc = dom::parse("<body><div>chrome</div><main><p>main text</p></main></body>");
        let body = doc.select("body");

        let content = locate_content(&body);
        assert_eq!(content.text_content().trim(), "main text");
    }

    #[test]
    fn falls_back_to_body() {
        let doc = dom::parse("<body><div>everything</div></body>");
        let body = doc.select("body");

        let content = locate_content(&body);
        assert_eq!(content.text_content().trim(), "everything");
    }

    #[test]
    fn first_article_in_document_order() {
        let doc = dom::parse(
            "<body><article><p>first</p></article><article><p>second</p></article></body>",
        );
        let body = doc.select("body");

        let content = locate_content(&body);
        assert_eq!(content.text_content().trim(), "first");
    }
}

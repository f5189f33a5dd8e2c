//! Comment extraction from schema.org Comment microdata.

use crate::dom::TreeNode;
use crate::patterns;
use crate::result::UserComment;

/// Extract every microdata comment item, in document order.
///
/// Each sub-field resolves independently and defaults to empty; a missing
/// sub-element never excludes the comment from the result.
#[must_use]
pub fn extract_comments<N: TreeNode>(root: &N) -> Vec<UserComment> {
    root.find_all(r#"[itemtype$="schema.org/Comment"]"#)
        .iter()
        .map(read_comment)
        .collect()
}

fn read_comment<N: TreeNode>(item: &N) -> UserComment {
    UserComment {
        user: text_of(item, r#"[itemprop="author"]"#),
        text: text_of(item, r#"[itemprop="text"]"#),
        date_created: item
            .find_first(r#"[itemprop="dateCreated"]"#)
            .and_then(|node| node.attribute("datetime"))
            .unwrap_or_default(),
    }
}

fn text_of<N: TreeNode>(item: &N, selector: &str) -> String {
    item.find_first(selector)
        .map(|node| patterns::collapse_whitespace(&node.text_content()))
        .unwrap_or_default()
}

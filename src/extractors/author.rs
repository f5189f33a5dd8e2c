//! Author resolution.
//!
//! An ordered chain of pure strategies, evaluated left to right with the
//! first hit winning: author meta tag, schema.org Person microdata, then
//! elements labeled `author` by class, id, or name attribute. The chain is
//! an array of function pointers so strategy order stays explicit and each
//! strategy is testable on its own.

use crate::dom::TreeNode;
use crate::patterns;

/// Resolve the document author; empty string when no strategy matches.
///
/// The winning value is whitespace-normalized before being returned.
#[must_use]
pub fn resolve_author<N: TreeNode>(root: &N) -> String {
    let strategies: [fn(&N) -> Option<String>; 3] =
        [from_meta_tag, from_schema_person, from_labeled_element];

    for strategy in strategies {
        if let Some(author) = strategy(root) {
            return patterns::collapse_whitespace(&author);
        }
    }

    String::new()
}

/// `<meta name="author" content="...">`, content non-empty.
fn from_meta_tag<N: TreeNode>(root: &N) -> Option<String> {
    let content = root
        .find_first(r#"meta[name="author"]"#)?
        .attribute("content")?;

    if content.trim().is_empty() {
        return None;
    }
    Some(content)
}

/// schema.org Person microdata: a populated `name` nested under an
/// `author` item whose type ends with `schema.org/Person`.
fn from_schema_person<N: TreeNode>(root: &N) -> Option<String> {
    let name = root.find_first(
        r#"[itemtype$="schema.org/Person"][itemprop="author"] [itemprop="name"]"#,
    )?;

    let text = name.text_content();
    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

/// Elements labeled `author` via class, id, or name attribute.
///
/// An exact attribute value match takes precedence over a substring
/// match; within each tier the first element in document order wins.
/// Element presence decides the match, so an empty-text element still
/// terminates the chain.
fn from_labeled_element<N: TreeNode>(root: &N) -> Option<String> {
    let exact = r#"[class="author"], [id="author"], [name="author"]"#;
    let substring = r#"[class*="author"], [id*="author"], [name*="author"]"#;

    root.find_first(exact)
        .or_else(|| root.find_first(substring))
        .map(|element| element.text_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn meta_tag_takes_precedence() {
        let doc = dom::parse(
            r#"<head><meta name="author" content="Jane Doe"></head>
               <body><span class="author">J. Smith</span></body>"#,
        );
        assert_eq!(resolve_author(&doc.select("html")), "Jane Doe");
    }

    #[test]
    fn empty_meta_falls_through() {
        let doc = dom::parse(
            r#"<head><meta name="author" content="  "></head>
               <body><div itemprop="author" itemscope itemtype="https://schema.org/Person">
                 <span itemprop="name">Schema Author</span>
               </div></body>"#,
        );
        assert_eq!(resolve_author(&doc.select("html")), "Schema Author");
    }

    #[test]
    fn schema_person_requires_populated_name() {
        let doc = dom::parse(
            r#"<body>
                 <div itemprop="author" itemscope itemtype="http://schema.org/Person">
                   <span itemprop="name"> </span>
                 </div>
                 <p class="author">Class Author</p>
               </body>"#,
        );
        assert_eq!(resolve_author(&doc.select("html")), "Class Author");
    }

    #[test]
    fn exact_attribute_beats_substring() {
        let doc = dom::parse(
            r#"<body>
                 <span class="post-author-box">Wrong</span>
                 <span id="author">Right</span>
               </body>"#,
        );
        assert_eq!(resolve_author(&doc.select("html")), "Right");
    }

    #[test]
    fn substring_tier_used_when_no_exact_match() {
        let doc = dom::parse(r#"<body><span class="article-author">By Line</span></body>"#);
        assert_eq!(resolve_author(&doc.select("html")), "By Line");
    }

    #[test]
    fn result_is_normalized() {
        let doc = dom::parse(r#"<body><div id="author">  A.   Writer  </div></body>"#);
        assert_eq!(resolve_author(&doc.select("html")), "A. Writer");
    }

    #[test]
    fn no_match_yields_empty() {
        let doc = dom::parse("<body><p>anonymous page</p></body>");
        assert_eq!(resolve_author(&doc.select("html")), "");
    }
}

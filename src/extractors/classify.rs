//! Article classification from JSON-LD structured data.

use serde_json::Value;

use crate::dom::TreeNode;

/// Schema.org types recognized as articles by default.
///
/// The set is configurable through
/// [`Options::article_types`](crate::Options::article_types).
pub const DEFAULT_ARTICLE_TYPES: &[&str] = &[
    "Article",
    "AdvertiserContentArticle",
    "BlogPosting",
    "LiveBlogPosting",
    "NewsArticle",
    "AnalysisNewsArticle",
    "BackgroundNewsArticle",
    "OpinionNewsArticle",
    "ReportageNewsArticle",
    "ReviewNewsArticle",
    "Report",
    "SatiricalArticle",
    "ScholarlyArticle",
    "SocialMediaPosting",
    "TechArticle",
];

/// True when any JSON-LD script in the document declares an `@type` from
/// the recognized set.
///
/// A script whose content fails to parse as JSON simply does not match;
/// processing continues with the next script and the classifier never
/// fails.
#[must_use]
pub fn is_article<N: TreeNode>(root: &N, article_types: &[String]) -> bool {
    root.find_all(r#"script[type="application/ld+json"]"#)
        .iter()
        .filter_map(|script| serde_json::from_str::<Value>(&script.text_content()).ok())
        .any(|data| {
            declared_types(&data)
                .iter()
                .any(|declared| article_types.iter().any(|known| known == declared))
        })
}

/// Read `@type` as declared, accepting both the scalar and array forms.
fn declared_types(data: &Value) -> Vec<String> {
    match data.get("@type") {
        Some(Value::String(single)) => vec![single.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

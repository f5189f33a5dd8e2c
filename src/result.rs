//! Result types for extraction output.
//!
//! Field names serialize in camelCase, matching the wire contract the
//! downstream API layer exposes (`lastModified`, `externalLinks`,
//! `isArticle`, `dateCreated`).

use serde::{Deserialize, Serialize};

/// One reader comment found via schema.org Comment microdata.
///
/// Each field independently defaults to empty when its sub-selector is
/// absent; a missing field never drops the comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComment {
    /// Comment author name, whitespace-normalized.
    pub user: String,

    /// Comment body, whitespace-normalized.
    pub text: String,

    /// Machine-readable creation timestamp, verbatim.
    pub date_created: String,
}

/// Structured article data extracted from one document.
///
/// Built fresh per extraction and never mutated afterwards. Absent data is
/// represented as empty values rather than missing fields, so callers never
/// need to distinguish "field absent" from "field not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Document title, verbatim.
    pub title: String,

    /// Last-modified timestamp as provided by the source, verbatim.
    pub last_modified: String,

    /// Author name, whitespace-normalized; empty if unresolved.
    pub author: String,

    /// Meta description, whitespace-normalized; empty if unresolved.
    pub description: String,

    /// Body text of the located content element, whitespace-normalized.
    pub text: String,

    /// Image URLs from the content element, deduplicated, in document
    /// order of first occurrence.
    pub images: Vec<String>,

    /// Reader comments, in document order.
    pub comments: Vec<UserComment>,

    /// Absolute off-site link URLs, deduplicated, in document order of
    /// first occurrence.
    pub external_links: Vec<String>,

    /// Whether JSON-LD structured data classified the page as an article.
    pub is_article: bool,
}

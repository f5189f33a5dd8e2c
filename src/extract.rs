//! Extraction orchestration.
//!
//! A single synchronous pass: locate the content element once, run the
//! independent resolvers, assemble the result. The only cross-field
//! knowledge here is handing the located content element to the text and
//! image steps.

use crate::dom::{self, TreeNode};
use crate::error::{Error, Result};
use crate::extractors::{author, classify, comments, description, images, links};
use crate::locator;
use crate::options::Options;
use crate::patterns;
use crate::result::ExtractionResult;
use crate::url_utils;

/// Run the full extraction pass against an HTML string.
pub fn extract_html(html: &str, opts: &Options) -> Result<ExtractionResult> {
    let doc = dom::parse(html);
    let root = doc.select("html");
    extract_from_node(&root, opts)
}

/// Run the full extraction pass against a document root node.
///
/// `root` is the document element; a missing body underneath it is the one
/// extraction-fatal condition. Everything else resolves to empty values.
pub fn extract_from_node<N: TreeNode>(root: &N, opts: &Options) -> Result<ExtractionResult> {
    let body = root.find_first("body").ok_or(Error::MissingBody)?;

    let document_url = opts.url.as_deref().unwrap_or_default();
    let base = url_utils::parse_base_url(document_url);

    let content = locator::locate_content(&body);

    Ok(ExtractionResult {
        title: root
            .find_first("title")
            .map(|title| title.text_content())
            .unwrap_or_default(),
        last_modified: opts.last_modified.clone().unwrap_or_default(),
        author: author::resolve_author(root),
        description: description::resolve_description(root),
        text: patterns::collapse_whitespace(&content.text_content()),
        images: images::collect_images(&content, base.as_ref()),
        comments: comments::extract_comments(root),
        external_links: links::collect_links(root, document_url, base.as_ref()),
        is_article: classify::is_article(root, &opts.article_types),
    })
}

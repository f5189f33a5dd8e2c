//! # page-distill
//!
//! Heuristic article extraction from rendered HTML documents.
//!
//! Given a document tree, this library locates the primary content and
//! resolves title, author, description, body text, images, reader
//! comments, external links, and an article classification — despite
//! wildly inconsistent page markup — using layered fallback strategies
//! rather than fixed selectors.
//!
//! Fetching and rendering are out of scope: a collaborator hands this
//! engine a ready document (or its serialized HTML) plus the document's
//! URL and last-modified metadata, and receives back a plain
//! [`ExtractionResult`].
//!
//! ## Quick Start
//!
//! ```rust
//! use page_distill::extract;
//!
//! let html = r#"<html><head><title>My Post</title>
//! <meta name="author" content="Jane Doe"></head>
//! <body><article><p>Main content here.</p></article></body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.author, "Jane Doe");
//! assert_eq!(result.text, "Main content here.");
//! # Ok::<(), page_distill::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - **Content location**: first `article`, else first `main`, else the
//!   body — first structural match wins, no scoring.
//! - **Fault isolation**: malformed hrefs, unparseable JSON-LD, and
//!   missing microdata sub-fields are skipped per item; absent data is
//!   reported as empty values, never as errors.
//! - **One fatal case**: a document without a body element fails the
//!   whole pass with [`Error::MissingBody`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Document Model seam: the `TreeNode` trait and its `dom_query` backing.
pub mod dom;

/// Charset detection and transcoding for the bytes entry point.
pub mod encoding;

/// Per-field resolvers (author, description, comments, images, links,
/// classification).
pub mod extractors;

/// Content element location.
pub mod locator;

/// URL resolution and origin utilities.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_from_node;
pub use options::Options;
pub use result::{ExtractionResult, UserComment};

/// Extracts structured article data from an HTML document using default
/// options.
///
/// Without a configured document URL, relative links and image sources
/// are not resolved and same-origin link exclusion is inert; prefer
/// [`extract_with_options`] when the URL is known.
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractionResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts structured article data from an HTML document with custom
/// options.
///
/// # Example
///
/// ```rust
/// use page_distill::{extract_with_options, Options};
///
/// let html = r#"<html><body>
///   <article><p>Content</p></article>
///   <a href="https://other.com/page">elsewhere</a>
/// </body></html>"#;
///
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.external_links, vec!["https://other.com/page"]);
/// # Ok::<(), page_distill::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractionResult> {
    extract::extract_html(html, options)
}

/// Extracts from raw HTML bytes with automatic charset detection.
///
/// Detects the encoding from `<meta charset>` or `http-equiv`
/// declarations, defaulting to UTF-8, and decodes lossily — invalid byte
/// sequences become replacement characters rather than errors.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<ExtractionResult> {
    let html_str = encoding::decode_html(html);
    extract(&html_str)
}

/// Extracts from raw HTML bytes with custom options and automatic charset
/// detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractionResult> {
    let html_str = encoding::decode_html(html);
    extract_with_options(&html_str, options)
}

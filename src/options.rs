//! Configuration options for extraction.

/// Configuration for one extraction pass.
///
/// All fields are public; use `Default::default()` and struct-update
/// syntax for overrides.
///
/// # Example
///
/// ```rust
/// use page_distill::Options;
///
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// The document's own URL.
    ///
    /// Used to resolve relative hrefs and image sources, and for the
    /// same-origin exclusion of collected links. When absent, relative
    /// references are skipped and the origin exclusion is inert.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Last-modified metadata of the document, passed through verbatim.
    ///
    /// Supplied by the document-acquisition layer (the engine does not
    /// parse or reformat it).
    ///
    /// Default: `None`
    pub last_modified: Option<String>,

    /// Schema.org type names the classifier treats as articles.
    ///
    /// A document counts as an article when any of its JSON-LD scripts
    /// declares an `@type` in this set.
    ///
    /// Default: the schema.org Article family, see
    /// [`crate::extractors::classify::DEFAULT_ARTICLE_TYPES`].
    pub article_types: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            last_modified: None,
            article_types: crate::extractors::classify::DEFAULT_ARTICLE_TYPES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

//! Error types for page-distill.
//!
//! Resolvers swallow their own recoverable failures (malformed hrefs,
//! unparseable JSON-LD, missing sub-selectors) and report empty values
//! instead. Only conditions that make the whole document unusable surface
//! through this type.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no body-equivalent root element.
    #[error("document has no body element")]
    MissingBody,

    /// Unexpected failure escaping a resolver.
    #[error("extraction failed: {0}")]
    Extraction(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

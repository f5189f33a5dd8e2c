//! Document Model seam.
//!
//! The extraction engine never binds to a concrete tree API. Instead it
//! works against [`TreeNode`], a trait exposing the four operations the
//! resolvers actually use: find-first and find-all by CSS selector,
//! attribute lookup, and text content. The default implementation is
//! backed by `dom_query`, so the same engine runs against an offline HTML
//! parse as it would against any other navigable tree.

use dom_query::{Document, Selection};

/// Minimal read-only view of a document tree node.
///
/// Implementations must report descendants in document order from
/// `find_all`, and `find_first` must equal the head of `find_all` for the
/// same selector. Nothing in the engine mutates the tree through this
/// trait.
pub trait TreeNode: Clone {
    /// First descendant matching the selector, in document order.
    fn find_first(&self, selector: &str) -> Option<Self>;

    /// All descendants matching the selector, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self>;

    /// Value of an attribute on this node, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text content of this node and its descendants.
    fn text_content(&self) -> String;
}

impl<'a> TreeNode for Selection<'a> {
    fn find_first(&self, selector: &str) -> Option<Self> {
        let found = self.select_single(selector);
        if found.exists() {
            Some(found)
        } else {
            None
        }
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        self.select(selector)
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name).map(|value| value.to_string())
    }

    fn text_content(&self) -> String {
        self.text().to_string()
    }
}

/// Parse an HTML string into a `dom_query` document.
///
/// The parser always synthesizes the `html`/`head`/`body` scaffolding, so
/// even fragments yield a navigable document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

//! Independent per-field resolvers.
//!
//! Each module consumes the document root (and, for images, the located
//! content element) and produces exactly one field of the result. The
//! resolvers share no state and run in any order; cross-field knowledge
//! lives only in the orchestrator.

pub mod author;
pub mod classify;
pub mod comments;
pub mod description;
pub mod images;
pub mod links;

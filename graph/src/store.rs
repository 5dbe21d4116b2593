//! The narrow query interface the resolution layer consumes.

use std::sync::Arc;

use thiserror::Error;

use crate::term::Node;

/// Result type alias using the graph-layer [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Graph-layer error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The serialized graph could not be parsed.
    #[error("graph parse error: {0}")]
    Parse(String),

    /// A query against the fact store failed.
    #[error("graph query failed: {0}")]
    Query(String),
}

impl Error {
    /// Creates a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Error::Query(msg.into())
    }
}

/// Read-only access to the license metadata fact store.
///
/// This is the seam between the typed resolution layer and whatever engine
/// actually holds the triples. Implementations answer three query shapes:
/// boolean existence checks, object lookup for a (subject, predicate) pair,
/// and reverse subject lookup for a (predicate, object) pair. Nothing in the
/// resolution layer ever writes through this interface.
pub trait MetadataGraph: std::fmt::Debug + Send + Sync {
    /// Returns whether the store asserts the given fact.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn ask(&self, subject: &str, predicate: &str, object: &Node) -> Result<bool>;

    /// Returns every object asserted for the (subject, predicate) pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn objects(&self, subject: &str, predicate: &str) -> Result<Vec<Node>>;

    /// Returns every subject IRI asserted with the (predicate, object) pair,
    /// in lexical order, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn subjects(&self, predicate: &str, object: &Node) -> Result<Vec<String>>;
}

/// A shared, read-only graph handle.
///
/// Every `License`, `Question`, and selector that references the same
/// metadata shares one of these; the graph itself is never copied.
pub type SharedGraph = Arc<dyn MetadataGraph>;

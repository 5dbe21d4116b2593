//! License metadata fact store.
//!
//! The `cc-license-graph` crate holds the graph-facing half of the license
//! metadata system: the RDF vocabulary constants shared across the
//! workspace, the [`Node`] term type, the narrow [`MetadataGraph`] query
//! interface the resolution layer consumes, and [`MemoryGraph`], a
//! sophia-backed in-memory implementation loaded from Turtle.
//!
//! # Entry Point
//!
//! ```
//! use cc_license_graph::{vocab, MemoryGraph, MetadataGraph, Node};
//!
//! let turtle = r#"
//! @prefix cc: <http://creativecommons.org/ns#> .
//! <http://creativecommons.org/licenses/by/3.0/> a cc:License .
//! "#;
//!
//! let graph = MemoryGraph::from_turtle(turtle)?;
//! assert!(graph.ask(
//!     "http://creativecommons.org/licenses/by/3.0/",
//!     vocab::rdf::TYPE,
//!     &Node::iri(vocab::cc::LICENSE),
//! )?);
//! # Ok::<(), cc_license_graph::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod memory;
pub mod store;
pub mod term;
pub mod vocab;

pub use memory::MemoryGraph;
pub use store::{Error, MetadataGraph, Result, SharedGraph};
pub use term::Node;

//! Typed license metadata resolution over an RDF fact graph.
//!
//! The `cc-license` crate reads license metadata (titles, versions,
//! jurisdictions, deprecation, supersession) stored as facts in a semantic
//! graph and exposes a typed object model over it: identity-validated
//! [`License`] entities with lazy per-attribute caching, per-family
//! [`LicenseSelector`] registries that mint and memoize them, and
//! [`Question`] value objects parsed from the multi-language selection
//! form schema. Callers never see the underlying graph query language.
//!
//! # Entry Point
//!
//! ```
//! use std::sync::Arc;
//! use cc_license::graph::{MemoryGraph, SharedGraph};
//! use cc_license::{GraphConfig, SelectorRegistry};
//!
//! let licenses: SharedGraph = Arc::new(MemoryGraph::from_turtle(
//!     r#"
//!     @prefix cc: <http://creativecommons.org/ns#> .
//!     @prefix dc: <http://purl.org/dc/elements/1.1/> .
//!     <http://creativecommons.org/licenses/by-sa/3.0/>
//!         a cc:License ;
//!         dc:title "Attribution-ShareAlike 3.0 Unported"@en .
//!     "#,
//! )?);
//! let selectors: SharedGraph = Arc::new(MemoryGraph::from_turtle(
//!     r#"
//!     @prefix cc: <http://creativecommons.org/ns#> .
//!     @prefix dc: <http://purl.org/dc/elements/1.1/> .
//!     <http://creativecommons.org/license/>
//!         a cc:LicenseSelector ;
//!         cc:licenseCode "standard" ;
//!         dc:title "Creative Commons"@en .
//!     "#,
//! )?);
//!
//! let registry = SelectorRegistry::new(GraphConfig { selectors, licenses });
//! let standard = registry.choose("standard")?;
//! let by_sa = standard.by_code("by-sa", None, Some("3.0"))?;
//! assert_eq!(by_sa.title("en")?, "Attribution-ShareAlike 3.0 Unported");
//! # Ok::<(), cc_license::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod jurisdiction;
pub mod license;
pub mod question;
pub mod resolver;
pub mod schema;
pub mod selector;
pub mod uri;

pub use cc_license_graph as graph;

pub use error::{Error, Result};
pub use jurisdiction::Jurisdiction;
pub use license::License;
pub use question::Question;
pub use resolver::MetadataResolver;
pub use schema::SchemaNode;
pub use selector::{GraphConfig, LicenseSelector, SelectorRegistry};

/// The language every lookup defaults to when none is meaningful.
pub const DEFAULT_LANGUAGE: &str = "en";

//! Shared fixtures and instrumentation for the integration suites.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use cc_license::graph::{MemoryGraph, MetadataGraph, Node};
use cc_license::GraphConfig;

pub const LICENSES_TTL: &str = include_str!("../fixtures/licenses.ttl");
pub const SELECTORS_TTL: &str = include_str!("../fixtures/selectors.ttl");
pub const QUESTIONS_XML: &str = include_str!("../fixtures/questions.xml");

pub const BY_SA_10: &str = "http://creativecommons.org/licenses/by-sa/1.0/";
pub const BY_SA_20: &str = "http://creativecommons.org/licenses/by-sa/2.0/";
pub const BY_SA_30: &str = "http://creativecommons.org/licenses/by-sa/3.0/";
pub const BY_SA_30_US: &str = "http://creativecommons.org/licenses/by-sa/3.0/us/";
pub const SAMPLING_10: &str = "http://creativecommons.org/licenses/sampling/1.0/";

/// The standard graph configuration over the bundled fixtures.
pub fn config() -> GraphConfig {
    GraphConfig {
        selectors: Arc::new(
            MemoryGraph::from_turtle(SELECTORS_TTL).expect("selector fixture must parse"),
        ),
        licenses: Arc::new(
            MemoryGraph::from_turtle(LICENSES_TTL).expect("license fixture must parse"),
        ),
    }
}

/// A [`MetadataGraph`] wrapper counting object lookups per predicate.
///
/// The resolution layer issues exactly one `objects` call per attribute
/// resolution, so the per-predicate counts observe how often each backing
/// mapping was recomputed.
#[derive(Debug)]
pub struct CountingGraph {
    inner: MemoryGraph,
    object_calls: Mutex<HashMap<String, usize>>,
}

impl CountingGraph {
    pub fn from_turtle(source: &str) -> Self {
        Self {
            inner: MemoryGraph::from_turtle(source).expect("counting fixture must parse"),
            object_calls: Mutex::new(HashMap::new()),
        }
    }

    /// How many times `objects` ran for `predicate`.
    pub fn object_calls(&self, predicate: &str) -> usize {
        self.object_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(predicate)
            .copied()
            .unwrap_or(0)
    }
}

impl MetadataGraph for CountingGraph {
    fn ask(&self, subject: &str, predicate: &str, object: &Node) -> cc_license::graph::Result<bool> {
        self.inner.ask(subject, predicate, object)
    }

    fn objects(&self, subject: &str, predicate: &str) -> cc_license::graph::Result<Vec<Node>> {
        *self
            .object_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(predicate.to_owned())
            .or_insert(0) += 1;
        self.inner.objects(subject, predicate)
    }

    fn subjects(&self, predicate: &str, object: &Node) -> cc_license::graph::Result<Vec<String>> {
        self.inner.subjects(predicate, object)
    }
}

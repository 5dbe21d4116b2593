//! Attribute queries over the metadata graph.
//!
//! [`MetadataResolver`] is the helper layer between the typed entities and
//! the fact store: it knows which vocabulary predicate backs each attribute
//! and returns language-keyed mappings or scalar values. It holds no state
//! beyond the shared graph handle; all memoization happens in the entities.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use cc_license_graph::vocab::{cc, dc, dcq, rdf};
use cc_license_graph::{Node, SharedGraph};

use crate::error::Result;
use crate::jurisdiction::Jurisdiction;
use crate::uri;
use crate::DEFAULT_LANGUAGE;

/// Translates typed attribute requests into fact-store queries.
///
/// Cloning is cheap; every clone shares the same read-only graph handle.
#[derive(Debug, Clone)]
pub struct MetadataResolver {
    graph: SharedGraph,
}

impl MetadataResolver {
    /// Wraps a shared graph handle.
    #[must_use]
    pub fn new(graph: SharedGraph) -> Self {
        Self { graph }
    }

    /// The underlying graph handle.
    #[must_use]
    pub fn graph(&self) -> &SharedGraph {
        &self.graph
    }

    /// Whether the graph asserts `subject` as a license.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn is_license(&self, subject: &str) -> Result<bool> {
        Ok(self.graph.ask(subject, rdf::TYPE, &Node::iri(cc::LICENSE))?)
    }

    /// The language→text title mapping for `subject`.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn titles(&self, subject: &str) -> Result<BTreeMap<String, String>> {
        self.text_map(subject, dc::TITLE)
    }

    /// The language→text description mapping for `subject`.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn descriptions(&self, subject: &str) -> Result<BTreeMap<String, String>> {
        self.text_map(subject, dc::DESCRIPTION)
    }

    fn text_map(&self, subject: &str, predicate: &str) -> Result<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();
        for node in self.graph.objects(subject, predicate)? {
            if let Some(text) = node.as_text() {
                // plain literals are read as English
                let language = node.language().unwrap_or(DEFAULT_LANGUAGE);
                map.insert(language.to_owned(), text.to_owned());
            }
        }
        tracing::debug!(subject, predicate, entries = map.len(), "resolved text mapping");
        Ok(map)
    }

    /// The version literal for `subject`, or `""` if none is asserted.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn version(&self, subject: &str) -> Result<String> {
        let version = self
            .graph
            .objects(subject, dcq::HAS_VERSION)?
            .into_iter()
            .find_map(|node| node.as_text().map(str::to_owned));
        Ok(version.unwrap_or_default())
    }

    /// The jurisdiction for `subject`, or `None` for unported licenses.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn jurisdiction(&self, subject: &str) -> Result<Option<Jurisdiction>> {
        let jurisdiction = self
            .graph
            .objects(subject, cc::JURISDICTION)?
            .into_iter()
            .find_map(|node| node.as_iri().map(Jurisdiction::from_uri));
        Ok(jurisdiction)
    }

    /// Whether `subject` carries a deprecation date.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn deprecated(&self, subject: &str) -> Result<bool> {
        Ok(!self.graph.objects(subject, cc::DEPRECATED_ON)?.is_empty())
    }

    /// The supersession pair for `subject`: the flag and the replacing
    /// license, resolved together in one query.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn superseded(&self, subject: &str) -> Result<(bool, Option<String>)> {
        let replaced_by = self
            .graph
            .objects(subject, dcq::IS_REPLACED_BY)?
            .into_iter()
            .find_map(|node| node.as_iri().map(str::to_owned));
        Ok((replaced_by.is_some(), replaced_by))
    }

    /// Every subject the graph asserts as a license, in lexical order.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn license_uris(&self) -> Result<Vec<String>> {
        Ok(self.graph.subjects(rdf::TYPE, &Node::iri(cc::LICENSE))?)
    }

    /// The up-to-date version for a (family code, jurisdiction code) pair.
    ///
    /// Derived from the graph: every canonical license URI is decoded,
    /// filtered on the pair, and the maximum dotted version wins. Returns
    /// `None` when the pair has no licenses at all. Non-canonical URIs
    /// (such as the public-domain dedication) take no part in the ordering.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn current_version(
        &self,
        code: &str,
        jurisdiction: Option<&str>,
    ) -> Result<Option<String>> {
        let mut best: Option<String> = None;
        for license_uri in self.license_uris()? {
            let Ok(parts) = uri::parse(&license_uri) else {
                continue;
            };
            if parts.code != code || parts.jurisdiction.as_deref() != jurisdiction {
                continue;
            }
            let Some(version) = parts.version else {
                continue;
            };
            let better = match best.as_deref() {
                None => true,
                Some(current) => uri::compare_versions(&version, current) == Ordering::Greater,
            };
            if better {
                best = Some(version);
            }
        }
        tracing::debug!(code, ?jurisdiction, current = ?best, "derived current version");
        Ok(best)
    }
}

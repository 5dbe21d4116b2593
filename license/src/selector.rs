//! Per-family license registries.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cc_license_graph::vocab::{cc, rdf};
use cc_license_graph::{Node, SharedGraph};

use crate::error::{Error, Result};
use crate::license::License;
use crate::question::Question;
use crate::resolver::MetadataResolver;
use crate::uri;

/// The family id whose lookups always resolve to the fixed
/// [`uri::PUBLIC_DOMAIN`] URI.
const PUBLIC_DOMAIN_ID: &str = "publicdomain";

/// Graph handles injected into every selector.
///
/// Two scopes: `selectors` holds the selector-scoped facts (family codes,
/// selector titles) and `licenses` is the combined graph every minted
/// [`License`] resolves against. Both are shared, read-only handles.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Selector-scoped metadata.
    pub selectors: SharedGraph,
    /// Combined license metadata.
    pub licenses: SharedGraph,
}

/// Mints and memoizes [`License`] instances for one license family.
///
/// The URI→License cache grows monotonically and is never evicted;
/// repeated lookups of the same URI return the identical `Arc`.
#[derive(Debug)]
pub struct LicenseSelector {
    uri: String,
    id: String,
    titles: BTreeMap<String, String>,
    resolver: MetadataResolver,
    licenses: RwLock<HashMap<String, Arc<License>>>,
}

impl LicenseSelector {
    /// Builds the selector for `uri`, eagerly resolving its title mapping
    /// from the selector-scoped graph.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures from the eager title resolution.
    pub fn new(
        config: &GraphConfig,
        uri: impl Into<String>,
        license_code: impl Into<String>,
    ) -> Result<Self> {
        let uri = uri.into();
        let titles = MetadataResolver::new(config.selectors.clone()).titles(&uri)?;
        Ok(Self {
            uri,
            id: license_code.into(),
            titles,
            resolver: MetadataResolver::new(config.licenses.clone()),
            licenses: RwLock::new(HashMap::new()),
        })
    }

    /// The selector's identifying URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The license-family code (e.g. `"standard"` or `"publicdomain"`).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The selector title in `language`, from the eagerly-loaded mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] if `language` is absent.
    pub fn title(&self, language: &str) -> Result<&str> {
        self.titles
            .get(language)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_translation(&self.uri, language))
    }

    /// The memoized license for `uri`, minting it on first use.
    ///
    /// Identity is stable: two calls with the same URI return the same
    /// `Arc`; construction failures propagate and cache nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LicenseNotFound`] if the graph does not assert
    /// `uri` as a license; fact-store failures propagate.
    pub fn by_uri(&self, uri: &str) -> Result<Arc<License>> {
        if let Some(license) = self.read_cache().get(uri) {
            return Ok(Arc::clone(license));
        }
        let fresh = Arc::new(License::new(
            Arc::clone(self.resolver.graph()),
            uri,
            &self.id,
        )?);
        tracing::debug!(uri, selector = %self.id, "minted license instance");
        let mut cache = self.write_cache();
        Ok(Arc::clone(cache.entry(uri.to_owned()).or_insert(fresh)))
    }

    /// The license for a (code, jurisdiction, version) triple.
    ///
    /// The `publicdomain` family resolves to its one fixed URI regardless
    /// of the arguments. Otherwise a missing version falls back to the
    /// current-version lookup before the canonical URI is built and handed
    /// to [`by_uri`](Self::by_uri).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LicenseNotFound`] if no version can be derived for
    /// the pair or the built URI fails the existence check; fact-store
    /// failures propagate.
    pub fn by_code(
        &self,
        license_code: &str,
        jurisdiction: Option<&str>,
        version: Option<&str>,
    ) -> Result<Arc<License>> {
        if self.id == PUBLIC_DOMAIN_ID {
            return self.by_uri(uri::PUBLIC_DOMAIN);
        }
        let version = match version {
            Some(version) => version.to_owned(),
            None => self
                .resolver
                .current_version(license_code, jurisdiction)?
                .ok_or_else(|| {
                    Error::license_not_found(format!("{}{license_code}/", uri::LICENSE_BASE))
                })?,
        };
        self.by_uri(&uri::build(license_code, &version, jurisdiction))
    }

    /// Selects a license from a mapping of answered questions.
    ///
    /// Open extension point: the mapping from answers back to a license is
    /// unspecified and intentionally unimplemented.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::NotImplemented`].
    pub fn by_answers(&self, _answers: &BTreeMap<String, String>) -> Result<Arc<License>> {
        Err(Error::NotImplemented {
            feature: "answer-driven license selection",
        })
    }

    /// Enumerates the selection questions for this family.
    ///
    /// Open extension point, paired with
    /// [`by_answers`](Self::by_answers).
    ///
    /// # Errors
    ///
    /// Always returns [`Error::NotImplemented`].
    pub fn questions(&self) -> Result<Vec<Question>> {
        Err(Error::NotImplemented {
            feature: "selector question enumeration",
        })
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<License>>> {
        self.licenses.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<License>>> {
        self.licenses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Discovers and memoizes the per-family selectors the graph declares.
#[derive(Debug)]
pub struct SelectorRegistry {
    config: GraphConfig,
    selectors: RwLock<HashMap<String, Arc<LicenseSelector>>>,
}

impl SelectorRegistry {
    /// Wraps the injected graph handles.
    #[must_use]
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            selectors: RwLock::new(HashMap::new()),
        }
    }

    /// The family codes declared by the selector graph, in lexical order.
    ///
    /// # Errors
    ///
    /// Propagates fact-store failures.
    pub fn codes(&self) -> Result<Vec<String>> {
        let mut codes = Vec::new();
        for selector_uri in self
            .config
            .selectors
            .subjects(rdf::TYPE, &Node::iri(cc::LICENSE_SELECTOR))?
        {
            for node in self
                .config
                .selectors
                .objects(&selector_uri, cc::LICENSE_CODE)?
            {
                if let Some(code) = node.as_text() {
                    codes.push(code.to_owned());
                }
            }
        }
        codes.sort();
        codes.dedup();
        Ok(codes)
    }

    /// The selector for `code`, minted and memoized on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectorNotFound`] if the graph declares no such
    /// family; fact-store failures propagate.
    pub fn choose(&self, code: &str) -> Result<Arc<LicenseSelector>> {
        if let Some(selector) = self
            .selectors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
        {
            return Ok(Arc::clone(selector));
        }
        let selector_uri = self.selector_uri(code)?;
        let fresh = Arc::new(LicenseSelector::new(&self.config, selector_uri, code)?);
        let mut cache = self
            .selectors
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(code.to_owned()).or_insert(fresh)))
    }

    fn selector_uri(&self, code: &str) -> Result<String> {
        self.config
            .selectors
            .subjects(cc::LICENSE_CODE, &Node::text(code))?
            .into_iter()
            .next()
            .ok_or_else(|| Error::SelectorNotFound {
                code: code.to_owned(),
            })
    }
}

//! The identity-validated license entity.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use cc_license_graph::SharedGraph;

use crate::error::{Error, Result};
use crate::jurisdiction::Jurisdiction;
use crate::resolver::MetadataResolver;
use crate::uri;

/// A single license identified by URI.
///
/// Identity is checked against the graph exactly once, at construction.
/// Every descriptive attribute resolves lazily on first access and is then
/// cached for the lifetime of the instance; caches are written at most once
/// and never invalidated. Instances are usually minted and memoized by a
/// [`LicenseSelector`](crate::selector::LicenseSelector), but direct
/// construction is equivalent.
#[derive(Debug)]
pub struct License {
    uri: String,
    license_class: String,
    resolver: MetadataResolver,
    titles: OnceLock<BTreeMap<String, String>>,
    descriptions: OnceLock<BTreeMap<String, String>>,
    version: OnceLock<String>,
    jurisdiction: OnceLock<Option<Jurisdiction>>,
    deprecated: OnceLock<bool>,
    // superseded and superseded_by always resolve together; one cached pair
    // backs both accessors.
    supersession: OnceLock<(bool, Option<String>)>,
}

impl License {
    /// Validates `uri` against the graph and wraps it.
    ///
    /// The graph handle is shared, not copied; `license_class` is stored as
    /// given (it is assigned by the minting selector, not derived from the
    /// graph).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LicenseNotFound`] if the graph does not assert
    /// `uri` as a license; fact-store failures propagate.
    pub fn new(
        graph: SharedGraph,
        uri: impl Into<String>,
        license_class: impl Into<String>,
    ) -> Result<Self> {
        let uri = uri.into();
        let resolver = MetadataResolver::new(graph);
        if !resolver.is_license(&uri)? {
            return Err(Error::license_not_found(uri));
        }
        Ok(Self {
            uri,
            license_class: license_class.into(),
            resolver,
            titles: OnceLock::new(),
            descriptions: OnceLock::new(),
            version: OnceLock::new(),
            jurisdiction: OnceLock::new(),
            deprecated: OnceLock::new(),
            supersession: OnceLock::new(),
        })
    }

    /// The identifying URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The license class assigned at construction.
    #[must_use]
    pub fn license_class(&self) -> &str {
        &self.license_class
    }

    /// The title in `language`.
    ///
    /// The full language→text mapping is resolved once and cached; the
    /// per-language lookup runs on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] if `language` is absent from
    /// the mapping; fact-store failures propagate on the first call.
    pub fn title(&self, language: &str) -> Result<&str> {
        let titles = self.cached_titles()?;
        titles
            .get(language)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_translation(&self.uri, language))
    }

    /// The description in `language`.
    ///
    /// Same resolution strategy as [`title`](Self::title), with one extra
    /// policy: a license with no descriptions at all yields `""` for every
    /// requested language instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] if descriptions exist but not
    /// in `language`; fact-store failures propagate on the first call.
    pub fn description(&self, language: &str) -> Result<&str> {
        let descriptions = self.cached_descriptions()?;
        if descriptions.is_empty() {
            return Ok("");
        }
        descriptions
            .get(language)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_translation(&self.uri, language))
    }

    /// The version literal (e.g. `"3.0"`), or `""` if none is asserted.
    ///
    /// # Errors
    ///
    /// Fact-store failures propagate on the first call.
    pub fn version(&self) -> Result<&str> {
        if let Some(version) = self.version.get() {
            return Ok(version);
        }
        let version = self.resolver.version(&self.uri)?;
        Ok(self.version.get_or_init(|| version))
    }

    /// The jurisdiction, or `None` for unported licenses.
    ///
    /// # Errors
    ///
    /// Fact-store failures propagate on the first call.
    pub fn jurisdiction(&self) -> Result<Option<&Jurisdiction>> {
        if let Some(jurisdiction) = self.jurisdiction.get() {
            return Ok(jurisdiction.as_ref());
        }
        let jurisdiction = self.resolver.jurisdiction(&self.uri)?;
        Ok(self.jurisdiction.get_or_init(|| jurisdiction).as_ref())
    }

    /// Whether the license carries a deprecation date.
    ///
    /// # Errors
    ///
    /// Fact-store failures propagate on the first call.
    pub fn deprecated(&self) -> Result<bool> {
        if let Some(deprecated) = self.deprecated.get() {
            return Ok(*deprecated);
        }
        let deprecated = self.resolver.deprecated(&self.uri)?;
        Ok(*self.deprecated.get_or_init(|| deprecated))
    }

    /// Whether the license has been replaced by a newer one.
    ///
    /// # Errors
    ///
    /// Fact-store failures propagate on the first call.
    pub fn superseded(&self) -> Result<bool> {
        Ok(self.cached_supersession()?.0)
    }

    /// The replacing license, if this one has been superseded.
    ///
    /// Reads the same cached pair as [`superseded`](Self::superseded); the
    /// two never trigger separate resolutions.
    ///
    /// # Errors
    ///
    /// Fact-store failures propagate on the first call.
    pub fn superseded_by(&self) -> Result<Option<&str>> {
        Ok(self.cached_supersession()?.1.as_deref())
    }

    /// The short family code decoded from the URI.
    ///
    /// Decoded on every call; never cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUri`] if the URI does not decode.
    pub fn license_code(&self) -> Result<String> {
        uri::license_code(&self.uri)
    }

    /// The up-to-date version for this license's family and jurisdiction.
    ///
    /// Derived on every call: the cached jurisdiction is mapped to its
    /// short code (or none for unported licenses) and the current-version
    /// lookup runs against the graph. No independent caching.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUri`] if the URI does not decode;
    /// fact-store failures propagate.
    pub fn current_version(&self) -> Result<Option<String>> {
        let code = self.license_code()?;
        let jurisdiction = self.jurisdiction()?.map(|j| j.code().to_owned());
        self.resolver.current_version(&code, jurisdiction.as_deref())
    }

    /// Whether this license qualifies as libre.
    ///
    /// Not yet implemented: the classification rules are undefined and this
    /// always reports `false`.
    #[must_use]
    pub fn libre(&self) -> bool {
        false
    }

    fn cached_titles(&self) -> Result<&BTreeMap<String, String>> {
        if let Some(titles) = self.titles.get() {
            return Ok(titles);
        }
        let titles = self.resolver.titles(&self.uri)?;
        Ok(self.titles.get_or_init(|| titles))
    }

    fn cached_descriptions(&self) -> Result<&BTreeMap<String, String>> {
        if let Some(descriptions) = self.descriptions.get() {
            return Ok(descriptions);
        }
        let descriptions = self.resolver.descriptions(&self.uri)?;
        Ok(self.descriptions.get_or_init(|| descriptions))
    }

    fn cached_supersession(&self) -> Result<&(bool, Option<String>)> {
        if let Some(pair) = self.supersession.get() {
            return Ok(pair);
        }
        let pair = self.resolver.superseded(&self.uri)?;
        Ok(self.supersession.get_or_init(|| pair))
    }
}

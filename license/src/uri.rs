//! Canonical license URI construction and decoding.
//!
//! Canonical license URIs follow the shape
//! `http://creativecommons.org/licenses/<code>/<version>[/<jurisdiction>]/`,
//! with the public-domain dedication as the one versionless exception.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Prefix every canonical license URI starts with.
pub const LICENSE_BASE: &str = "http://creativecommons.org/licenses/";

/// The fixed URI of the public-domain dedication.
///
/// Every `publicdomain` lookup resolves here regardless of jurisdiction or
/// version arguments.
pub const PUBLIC_DOMAIN: &str = "http://creativecommons.org/licenses/publicdomain/";

/// Decoded components of a canonical license URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    /// Short family code (e.g. `"by-sa"`).
    pub code: String,
    /// Version string (e.g. `"3.0"`); absent for the public-domain URI.
    pub version: Option<String>,
    /// Jurisdiction short code (e.g. `"us"`); absent for unported licenses.
    pub jurisdiction: Option<String>,
}

/// Decodes a canonical license URI into its components.
///
/// # Errors
///
/// Returns [`Error::MalformedUri`] if the URI is not under the canonical
/// license base or carries an unexpected number of path segments.
pub fn parse(uri: &str) -> Result<UriParts> {
    let rest = uri
        .strip_prefix(LICENSE_BASE)
        .ok_or_else(|| Error::malformed_uri(uri))?;
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [code] => Ok(UriParts {
            code: (*code).to_owned(),
            version: None,
            jurisdiction: None,
        }),
        [code, version] => Ok(UriParts {
            code: (*code).to_owned(),
            version: Some((*version).to_owned()),
            jurisdiction: None,
        }),
        [code, version, jurisdiction] => Ok(UriParts {
            code: (*code).to_owned(),
            version: Some((*version).to_owned()),
            jurisdiction: Some((*jurisdiction).to_owned()),
        }),
        _ => Err(Error::malformed_uri(uri)),
    }
}

/// Decodes just the license code from a canonical URI.
///
/// # Errors
///
/// Returns [`Error::MalformedUri`] if the URI does not decode.
pub fn license_code(uri: &str) -> Result<String> {
    parse(uri).map(|parts| parts.code)
}

/// Builds the canonical URI for a (code, version, jurisdiction) triple.
#[must_use]
pub fn build(code: &str, version: &str, jurisdiction: Option<&str>) -> String {
    match jurisdiction {
        Some(jurisdiction) => format!("{LICENSE_BASE}{code}/{version}/{jurisdiction}/"),
        None => format!("{LICENSE_BASE}{code}/{version}/"),
    }
}

/// Orders two dotted version strings numerically (`"10.0"` > `"9.0"`).
///
/// Non-numeric components sort as zero; missing components sort as zero, so
/// `"2.0"` and `"2.0.0"` compare equal.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = components(a);
    let right = components(b);
    let len = left.len().max(right.len());
    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

fn components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

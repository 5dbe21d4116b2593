//! Jurisdiction identifiers.

use std::fmt;

/// A legal/regional license variant, identified by URI with a short code.
///
/// The code is derived from the URI's trailing path segment (e.g.
/// `http://creativecommons.org/international/fr/` → `"fr"`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Jurisdiction {
    uri: String,
    code: String,
}

impl Jurisdiction {
    /// Wraps a jurisdiction URI, deriving its short code.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let code = uri_to_code(&uri).to_owned();
        Self { uri, code }
    }

    /// The identifying URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The short jurisdiction code (e.g. `"fr"`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Maps a jurisdiction URI to its short code (the trailing path segment).
#[must_use]
pub fn uri_to_code(uri: &str) -> &str {
    let trimmed = uri.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_trailing_segment() {
        assert_eq!(uri_to_code("http://creativecommons.org/international/fr/"), "fr");
        assert_eq!(uri_to_code("http://creativecommons.org/international/scotland"), "scotland");
    }

    #[test]
    fn jurisdiction_wraps_uri_and_code() {
        let j = Jurisdiction::from_uri("http://creativecommons.org/international/us/");
        assert_eq!(j.uri(), "http://creativecommons.org/international/us/");
        assert_eq!(j.code(), "us");
        assert_eq!(j.to_string(), "us");
    }
}

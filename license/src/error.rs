//! Error types for license metadata resolution.

use thiserror::Error;

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Resolution-layer error type.
///
/// Identity failures (`LicenseNotFound`, `QuestionNotFound`,
/// `SelectorNotFound`) surface at construction time and the object never
/// comes into existence. Everything else surfaces lazily, at first attribute
/// access. Nothing is retried or swallowed; every failure propagates to the
/// immediate caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The metadata graph does not assert the URI as a license.
    #[error("license <{uri}> does not exist in the metadata graph")]
    LicenseNotFound {
        /// The URI that failed the existence check.
        uri: String,
    },

    /// The form schema defines no such field for the license class.
    #[error("question '{field}' not found for license class '{license_class}'")]
    QuestionNotFound {
        /// The class-group that was scanned.
        license_class: String,
        /// The field identifier that was requested.
        field: String,
    },

    /// The selector graph declares no such license family.
    #[error("no license family '{code}' in the selector graph")]
    SelectorNotFound {
        /// The family code that was requested.
        code: String,
    },

    /// The requested language is absent from the resolved text mapping.
    ///
    /// Recoverable: retry with a different language.
    #[error("no '{language}' translation for {subject}")]
    MissingTranslation {
        /// What was being translated (a license URI, a question id, ...).
        subject: String,
        /// The language that was requested.
        language: String,
    },

    /// An intentionally unfinished contract was invoked.
    #[error("{feature} is not implemented")]
    NotImplemented {
        /// The unimplemented surface.
        feature: &'static str,
    },

    /// The URI does not follow the canonical license URI shape.
    #[error("<{uri}> is not a canonical license URI")]
    MalformedUri {
        /// The URI that failed to decode.
        uri: String,
    },

    /// The form-schema document could not be parsed.
    #[error("form schema error: {0}")]
    Schema(String),

    /// A fact-store query failed.
    #[error(transparent)]
    Graph(#[from] cc_license_graph::Error),
}

impl Error {
    /// Creates a license-not-found error.
    pub fn license_not_found(uri: impl Into<String>) -> Self {
        Error::LicenseNotFound { uri: uri.into() }
    }

    /// Creates a missing-translation error.
    pub fn missing_translation(subject: impl Into<String>, language: impl Into<String>) -> Self {
        Error::MissingTranslation {
            subject: subject.into(),
            language: language.into(),
        }
    }

    /// Creates a malformed-URI error.
    pub fn malformed_uri(uri: impl Into<String>) -> Self {
        Error::MalformedUri { uri: uri.into() }
    }

    /// Creates a form-schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Error::Schema(msg.into())
    }
}

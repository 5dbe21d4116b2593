//! RDF vocabulary constants for the license metadata graph.
//!
//! Constants are organized by vocabulary:
//! - `cc` - Creative Commons licensing vocabulary (http://creativecommons.org/ns#)
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `dc` - Dublin Core elements (http://purl.org/dc/elements/1.1/)
//! - `dcq` - Dublin Core terms (http://purl.org/dc/terms/)

/// Creative Commons licensing vocabulary constants.
pub mod cc {
    /// Namespace IRI for the `cc:` vocabulary.
    pub const NS: &str = "http://creativecommons.org/ns#";

    /// cc:License IRI, the class every license resource is typed with
    pub const LICENSE: &str = "http://creativecommons.org/ns#License";

    /// cc:LicenseSelector IRI, the class of per-family selector resources
    pub const LICENSE_SELECTOR: &str = "http://creativecommons.org/ns#LicenseSelector";

    /// cc:licenseCode IRI, the short family code asserted on a selector
    pub const LICENSE_CODE: &str = "http://creativecommons.org/ns#licenseCode";

    /// cc:jurisdiction IRI, linking a license to its jurisdiction resource
    pub const JURISDICTION: &str = "http://creativecommons.org/ns#jurisdiction";

    /// cc:deprecatedOn IRI, the date a license was deprecated
    pub const DEPRECATED_ON: &str = "http://creativecommons.org/ns#deprecatedOn";

    /// cc:legalcode IRI, linking a license to its legal-code document
    pub const LEGALCODE: &str = "http://creativecommons.org/ns#legalcode";
}

/// RDF vocabulary constants.
pub mod rdf {
    /// Namespace IRI for the `rdf:` vocabulary.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// Dublin Core element constants.
pub mod dc {
    /// Namespace IRI for the `dc:` vocabulary.
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";

    /// dc:title IRI, used for language-tagged license and selector titles
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";

    /// dc:description IRI, used for language-tagged license descriptions
    pub const DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
}

/// Dublin Core terms constants.
pub mod dcq {
    /// Namespace IRI for the `dcq:` vocabulary.
    pub const NS: &str = "http://purl.org/dc/terms/";

    /// dcq:hasVersion IRI, the license version literal (e.g. "3.0")
    pub const HAS_VERSION: &str = "http://purl.org/dc/terms/hasVersion";

    /// dcq:isReplacedBy IRI, the supersession link to the replacing license
    pub const IS_REPLACED_BY: &str = "http://purl.org/dc/terms/isReplacedBy";
}

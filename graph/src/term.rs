//! Object-position term type for graph query results.

use std::fmt;

/// A term in the object position of a metadata fact.
///
/// License metadata only ever needs two shapes: IRI references (jurisdiction
/// links, supersession links, type assertions) and literals, optionally
/// carrying a language tag (titles, descriptions, version strings, dates).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// An IRI reference to another resource.
    Iri(String),
    /// A literal value, optionally language-tagged.
    Literal {
        /// The lexical form of the literal.
        text: String,
        /// The language tag (e.g. `"en"`), if the literal carries one.
        language: Option<String>,
    },
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Creates a plain (untagged) literal node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Literal {
            text: text.into(),
            language: None,
        }
    }

    /// Creates a language-tagged literal node.
    pub fn lang_text(text: impl Into<String>, language: impl Into<String>) -> Self {
        Node::Literal {
            text: text.into(),
            language: Some(language.into()),
        }
    }

    /// Returns the IRI if this node is an IRI reference.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            Node::Literal { .. } => None,
        }
    }

    /// Returns the lexical form if this node is a literal.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Iri(_) => None,
            Node::Literal { text, .. } => Some(text),
        }
    }

    /// Returns the language tag if this node is a tagged literal.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match self {
            Node::Iri(_) => None,
            Node::Literal { language, .. } => language.as_deref(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Literal {
                text,
                language: Some(tag),
            } => write!(f, "\"{text}\"@{tag}"),
            Node::Literal {
                text,
                language: None,
            } => write!(f, "\"{text}\""),
        }
    }
}

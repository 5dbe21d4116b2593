//! In-memory fact store backed by a sophia graph.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use sophia_api::graph::Graph;
use sophia_api::source::TripleSource;
use sophia_api::term::matcher::Any;
use sophia_api::term::{IriRef, Term};
use sophia_api::triple::Triple;
use sophia_inmem::graph::FastGraph;
use sophia_turtle::parser::turtle;

use crate::store::{Error, MetadataGraph, Result};
use crate::term::Node;

/// An immutable in-memory metadata graph loaded from Turtle.
///
/// This is the stock [`MetadataGraph`] implementation: parse one or more
/// Turtle documents into a sophia [`FastGraph`] once, then answer the three
/// query shapes from memory. The graph is never mutated after loading.
pub struct MemoryGraph {
    inner: FastGraph,
}

fn iri(value: &str) -> IriRef<&str> {
    IriRef::new_unchecked(value)
}

impl MemoryGraph {
    /// Parses a Turtle document into a queryable graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the document is not valid Turtle.
    pub fn from_turtle(source: &str) -> Result<Self> {
        let inner: FastGraph = turtle::parse_str(source)
            .collect_triples()
            .map_err(|e| Error::parse(e.to_string()))?;
        tracing::debug!(bytes = source.len(), "parsed turtle metadata graph");
        Ok(Self { inner })
    }

    /// Reads and parses a Turtle file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the file cannot be read or is not valid
    /// Turtle.
    pub fn from_turtle_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;
        Self::from_turtle(&source)
    }

    /// Returns the number of facts held by the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.triples().count()
    }

    /// Returns whether the graph holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MemoryGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryGraph")
            .field("triples", &self.len())
            .finish()
    }
}

/// Returns whether a sophia term's literal value matches `text` / `language`.
fn literal_matches<T: Term>(term: &T, text: &str, language: Option<&str>) -> bool {
    let Some(form) = term.lexical_form() else {
        return false;
    };
    if &*form != text {
        return false;
    }
    let tag = term.language_tag();
    match (tag, language) {
        (Some(tag), Some(language)) => tag.as_str() == language,
        (None, None) => true,
        _ => false,
    }
}

impl MetadataGraph for MemoryGraph {
    fn ask(&self, subject: &str, predicate: &str, object: &Node) -> Result<bool> {
        let found = match object {
            Node::Iri(o) => self
                .inner
                .triples_matching([iri(subject)], [iri(predicate)], [iri(o)])
                .next()
                .is_some(),
            Node::Literal { text, language } => self
                .inner
                .triples_matching([iri(subject)], [iri(predicate)], Any)
                .filter_map(std::result::Result::ok)
                .any(|t| literal_matches(&t.o(), text, language.as_deref())),
        };
        Ok(found)
    }

    fn objects(&self, subject: &str, predicate: &str) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        for triple in self
            .inner
            .triples_matching([iri(subject)], [iri(predicate)], Any)
            .filter_map(std::result::Result::ok)
        {
            let o = triple.o();
            if let Some(obj_iri) = o.iri() {
                nodes.push(Node::iri(obj_iri.as_str()));
            } else if let Some(form) = o.lexical_form() {
                match o.language_tag() {
                    Some(tag) => nodes.push(Node::lang_text(&*form, tag.as_str())),
                    None => nodes.push(Node::text(&*form)),
                }
            }
            // blank nodes carry no license metadata; skipped
        }
        Ok(nodes)
    }

    fn subjects(&self, predicate: &str, object: &Node) -> Result<Vec<String>> {
        let mut found = BTreeSet::new();
        match object {
            Node::Iri(o) => {
                for triple in self
                    .inner
                    .triples_matching(Any, [iri(predicate)], [iri(o)])
                    .filter_map(std::result::Result::ok)
                {
                    if let Some(subj) = triple.s().iri() {
                        found.insert(subj.as_str().to_owned());
                    }
                }
            }
            Node::Literal { text, language } => {
                for triple in self
                    .inner
                    .triples_matching(Any, [iri(predicate)], Any)
                    .filter_map(std::result::Result::ok)
                {
                    if literal_matches(&triple.o(), text, language.as_deref()) {
                        if let Some(subj) = triple.s().iri() {
                            found.insert(subj.as_str().to_owned());
                        }
                    }
                }
            }
        }
        Ok(found.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::vocab::{cc, dc, dcq, rdf};

    const FIXTURE: &str = r#"
@prefix cc: <http://creativecommons.org/ns#> .
@prefix dc: <http://purl.org/dc/elements/1.1/> .
@prefix dcq: <http://purl.org/dc/terms/> .

<http://creativecommons.org/licenses/by-sa/3.0/>
    a cc:License ;
    dc:title "Attribution-ShareAlike 3.0 Unported"@en ;
    dc:title "Namensnennung-Weitergabe unter gleichen Bedingungen 3.0"@de ;
    dcq:hasVersion "3.0" .

<http://creativecommons.org/licenses/by-sa/2.0/>
    a cc:License ;
    dcq:isReplacedBy <http://creativecommons.org/licenses/by-sa/3.0/> .
"#;

    const BY_SA_30: &str = "http://creativecommons.org/licenses/by-sa/3.0/";
    const BY_SA_20: &str = "http://creativecommons.org/licenses/by-sa/2.0/";

    fn fixture() -> MemoryGraph {
        MemoryGraph::from_turtle(FIXTURE).expect("fixture turtle must parse")
    }

    #[test]
    fn ask_answers_type_assertions() {
        let graph = fixture();
        assert!(graph
            .ask(BY_SA_30, rdf::TYPE, &Node::iri(cc::LICENSE))
            .expect("query"));
        assert!(!graph
            .ask(
                "http://creativecommons.org/licenses/nonsense/1.0/",
                rdf::TYPE,
                &Node::iri(cc::LICENSE),
            )
            .expect("query"));
    }

    #[test]
    fn ask_matches_tagged_literals() {
        let graph = fixture();
        assert!(graph
            .ask(
                BY_SA_30,
                dc::TITLE,
                &Node::lang_text("Attribution-ShareAlike 3.0 Unported", "en"),
            )
            .expect("query"));
        // same text, wrong tag
        assert!(!graph
            .ask(
                BY_SA_30,
                dc::TITLE,
                &Node::lang_text("Attribution-ShareAlike 3.0 Unported", "de"),
            )
            .expect("query"));
    }

    #[test]
    fn objects_preserve_language_tags() {
        let graph = fixture();
        let titles = graph.objects(BY_SA_30, dc::TITLE).expect("query");
        assert_eq!(titles.len(), 2);
        assert!(titles
            .iter()
            .any(|n| n.language() == Some("en") && n.as_text().is_some()));
        assert!(titles.iter().any(|n| n.language() == Some("de")));

        let version = graph.objects(BY_SA_30, dcq::HAS_VERSION).expect("query");
        assert_eq!(version, vec![Node::text("3.0")]);
    }

    #[test]
    fn subjects_reverse_lookup() {
        let graph = fixture();
        let licenses = graph
            .subjects(rdf::TYPE, &Node::iri(cc::LICENSE))
            .expect("query");
        assert_eq!(licenses, vec![BY_SA_20.to_owned(), BY_SA_30.to_owned()]);

        let replaced = graph
            .subjects(dcq::IS_REPLACED_BY, &Node::iri(BY_SA_30))
            .expect("query");
        assert_eq!(replaced, vec![BY_SA_20.to_owned()]);
    }

    #[test]
    fn invalid_turtle_is_a_parse_error() {
        let err = MemoryGraph::from_turtle("@prefix broken").expect_err("must fail");
        assert!(matches!(err, Error::Parse(_)));
    }
}

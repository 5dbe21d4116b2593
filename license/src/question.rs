//! Guided-selection questions parsed from the form schema.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::schema::SchemaNode;
use crate::DEFAULT_LANGUAGE;

const LANG_ATTR: &str = "xml:lang";

/// One selection question for one license class.
///
/// Fully populated at construction or the constructor fails; immutable
/// thereafter. The `license_class` argument is only used to pick the
/// matching class-group out of the schema tree and is not retained.
#[derive(Debug, Clone)]
pub struct Question {
    id: String,
    labels: BTreeMap<String, String>,
    descriptions: BTreeMap<String, String>,
    enums: BTreeMap<String, BTreeMap<String, String>>,
}

impl Question {
    /// Scans the schema tree for the (`license_class`, `id`) field and
    /// populates the question from it.
    ///
    /// Class-groups are matched on their `id` attribute, fields on theirs;
    /// when the schema repeats a matching pair, later matches overwrite
    /// earlier ones. The constructor fails only when no pair matches
    /// anywhere in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QuestionNotFound`] when the schema defines no such
    /// class/field pair.
    pub fn new(root: &SchemaNode, license_class: &str, id: &str) -> Result<Self> {
        let mut found = false;
        let mut labels = BTreeMap::new();
        let mut descriptions = BTreeMap::new();
        let mut enums = BTreeMap::new();

        for group in root.children() {
            if group.attribute("id") != Some(license_class) {
                continue;
            }
            for field in group.children_named("field") {
                if field.attribute("id") != Some(id) {
                    continue;
                }
                found = true;
                labels = text_by_language(field, "label");
                descriptions = text_by_language(field, "description");
                enums = field
                    .children_named("enum")
                    .filter_map(|entry| {
                        let enum_id = entry.attribute("id")?.to_owned();
                        Some((enum_id, text_by_language(entry, "label")))
                    })
                    .collect();
            }
        }

        if !found {
            return Err(Error::QuestionNotFound {
                license_class: license_class.to_owned(),
                field: id.to_owned(),
            });
        }
        Ok(Self {
            id: id.to_owned(),
            labels,
            descriptions,
            enums,
        })
    }

    /// The field identifier within the schema.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The label in `language`; an empty language argument reads as `"en"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] if the (substituted) language
    /// is absent.
    pub fn label(&self, language: &str) -> Result<&str> {
        let language = effective_language(language);
        self.labels
            .get(language)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_translation(format!("question '{}'", self.id), language))
    }

    /// The description in `language`; an empty language argument reads as
    /// `"en"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] if the (substituted) language
    /// is absent.
    pub fn description(&self, language: &str) -> Result<&str> {
        let language = effective_language(language);
        self.descriptions
            .get(language)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_translation(format!("question '{}'", self.id), language))
    }

    /// The (label-in-language, enumeration-id) pairs over all enumerations.
    ///
    /// The same empty-language substitution applies. Iteration order is the
    /// underlying mapping's and not part of the contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] if any enumeration lacks the
    /// (substituted) language.
    pub fn answers(&self, language: &str) -> Result<Vec<(String, String)>> {
        let language = effective_language(language);
        let mut answers = Vec::with_capacity(self.enums.len());
        for (enum_id, labels) in &self.enums {
            let label = labels.get(language).ok_or_else(|| {
                Error::missing_translation(
                    format!("answer '{enum_id}' of question '{}'", self.id),
                    language,
                )
            })?;
            answers.push((label.clone(), enum_id.clone()));
        }
        Ok(answers)
    }
}

/// An explicitly empty language argument defaults like an absent one.
fn effective_language(language: &str) -> &str {
    if language.is_empty() {
        DEFAULT_LANGUAGE
    } else {
        language
    }
}

fn text_by_language(node: &SchemaNode, child: &str) -> BTreeMap<String, String> {
    node.children_named(child)
        .map(|entry| {
            let language = entry.attribute(LANG_ATTR).unwrap_or(DEFAULT_LANGUAGE);
            (language.to_owned(), entry.text().to_owned())
        })
        .collect()
}

//! Form-schema documents for guided license selection.
//!
//! The form schema is a hierarchical XML document: class-groups (identified
//! by an `id` attribute) contain `field` definitions, each carrying
//! `label`, `description`, and `enum` children with `xml:lang` attributes.
//! This module is only the tree walker; the semantic scan lives in
//! [`Question`](crate::question::Question).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// One element of a parsed form-schema document.
#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<SchemaNode>,
}

impl SchemaNode {
    /// Parses a form-schema XML document and returns its root element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] on malformed XML or an empty document.
    pub fn parse(source: &str) -> Result<SchemaNode> {
        let mut reader = Reader::from_str(source);
        let mut stack: Vec<SchemaNode> = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(node_from_start(e)?),
                Ok(Event::Empty(ref e)) => {
                    let node = node_from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        // a self-closing root is a complete document
                        None => return Ok(node),
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(current) = stack.last_mut() {
                        let unescaped =
                            e.unescape().map_err(|err| Error::schema(err.to_string()))?;
                        let trimmed = unescaped.trim();
                        if !trimmed.is_empty() {
                            if !current.text.is_empty() {
                                current.text.push(' ');
                            }
                            current.text.push_str(trimmed);
                        }
                    }
                }
                Ok(Event::End(_)) => {
                    let node = match stack.pop() {
                        Some(node) => node,
                        None => return Err(Error::schema("unbalanced closing tag")),
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
                Ok(Event::Eof) => {
                    return Err(Error::schema("document ended before the root was closed"))
                }
                Err(err) => return Err(Error::schema(err.to_string())),
                // declarations, comments, processing instructions
                Ok(_) => {}
            }
        }
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The element's text content, whitespace-normalized.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }

    /// Child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SchemaNode> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

fn node_from_start(e: &BytesStart<'_>) -> Result<SchemaNode> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::schema(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| Error::schema(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(SchemaNode {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

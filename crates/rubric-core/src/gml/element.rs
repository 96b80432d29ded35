use std::io::Read;
use std::path::Path;

use xml::reader::{EventReader, ParserConfig, XmlEvent};

use crate::error::{Result, RubricError};

/// Generic element node built from the reader's event stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Read a whole document into an element tree.
///
/// Comments and whitespace are dropped; any failure of the underlying
/// reader becomes a decode error naming `path`.
pub(crate) fn read_tree<R: Read>(source: R, path: &Path) -> Result<Element> {
    let config = ParserConfig::new()
        .trim_whitespace(true)
        .ignore_comments(true);
    let reader = EventReader::new_with_config(source, config);

    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    for event in reader {
        match event.map_err(|e| RubricError::decode(path, e))? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                stack.push(Element {
                    name: name.local_name,
                    attributes: attributes
                        .into_iter()
                        .map(|attr| (attr.name.local_name, attr.value))
                        .collect(),
                    children: Vec::new(),
                });
            }
            XmlEvent::EndElement { name } => {
                let element = stack.pop().ok_or_else(|| {
                    RubricError::decode(path, format!("unbalanced </{}>", name.local_name))
                })?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) => {
                tracing::debug!(text = %text.trim(), "ignoring character data");
            }
            _ => {}
        }
    }

    root.ok_or_else(|| RubricError::decode(path, "document has no root element"))
}

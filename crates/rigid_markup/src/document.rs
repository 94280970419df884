//! Lenient element trees built from XML markup.
//!
//! Parsing is "tidy": end tags whose names do not match are accepted, elements still open at the end of input are
//! closed implicitly, attribute values with broken entity references are kept verbatim, and text, comments,
//! processing instructions and declarations are dropped. Only elements and
//! their attributes survive, which is all the search engine needs.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::MarkupError;

/// A markup element: its (qualified) name, attributes in document order, and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter. A repeated name replaces the earlier value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name.into(), value.into());
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an attribute value by exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, MarkupError> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());

        for attribute in start.attributes().with_checks(false) {
            let attribute = attribute.map_err(|source| MarkupError::Attribute {
                element: element.name.clone(),
                source,
            })?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = match attribute.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(err) => {
                    tracing::warn!(
                        element = %element.name,
                        attribute = %key,
                        error = %err,
                        "cannot unescape attribute value, keeping it verbatim"
                    );
                    String::from_utf8_lossy(&attribute.value).into_owned()
                }
            };
            element.set_attribute(key, value);
        }

        Ok(element)
    }
}

/// A parsed markup document.
///
/// Well-formed XML has exactly one top-level element; tidy parsing keeps any extra top-level elements as
/// additional document children instead of rejecting the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    children: Vec<Element>,
}

impl Document {
    /// Parse a document from raw bytes.
    ///
    /// ## Errors
    /// - [`MarkupError::Encoding`] if the bytes are not UTF-8.
    /// - [`MarkupError::Syntax`] / [`MarkupError::Attribute`] for markup the reader cannot recover from.
    /// - [`MarkupError::NoRootElement`] if the input contains no element at all.
    pub fn parse(bytes: &[u8]) -> Result<Self, MarkupError> {
        let text = std::str::from_utf8(bytes)?;
        let mut reader = Reader::from_str(text);
        {
            let config = reader.config_mut();
            config.trim_text(true);
            config.check_end_names = false;
        }

        let mut open: Vec<Element> = Vec::new();
        let mut children: Vec<Element> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => open.push(Element::from_start(&start)?),
                Ok(Event::Empty(start)) => attach(&mut open, &mut children, Element::from_start(&start)?),
                Ok(Event::End(_)) => {
                    // A stray end tag with nothing open is dropped.
                    if let Some(element) = open.pop() {
                        attach(&mut open, &mut children, element);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(source) => {
                    return Err(MarkupError::Syntax {
                        position: reader.buffer_position() as u64,
                        source,
                    });
                }
            }
        }

        // Tidy: close whatever is still open at end of input.
        while let Some(element) = open.pop() {
            attach(&mut open, &mut children, element);
        }

        if children.is_empty() {
            return Err(MarkupError::NoRootElement);
        }
        Ok(Self { children })
    }

    /// Read and parse a document from disk.
    pub fn open(path: &Path) -> Result<Self, MarkupError> {
        let bytes = fs::read(path).map_err(|source| MarkupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes)
    }

    /// Build a document directly from a root element.
    pub fn from_root(root: Element) -> Self {
        Self { children: vec![root] }
    }

    /// The first top-level element.
    pub fn root(&self) -> Option<&Element> {
        self.children.first()
    }

    /// Every top-level element, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// Attach a finished element to its parent, or to the document when nothing is open.
fn attach(open: &mut [Element], top_level: &mut Vec<Element>, element: Element) {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None => top_level.push(element),
    }
}

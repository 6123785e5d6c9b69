//! Depth-tracked pull parser.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};

use crate::error::XmlError;

/// Simplified pull event seen by unmarshallers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// An element was opened. The element is on the stack.
    StartElement(String),
    /// An element was closed. The element is off the stack.
    EndElement(String),
    /// Text, comments, declarations and anything else.
    Other,
    /// The document is exhausted.
    EndDocument,
}

/// Expression whose text is captured as metadata as soon as it is seen.
#[derive(Debug, Clone)]
struct MetadataExpression {
    key: &'static str,
    expression: &'static str,
    target_depth: usize,
}

/// Cursor over an XML document that keeps the stack of open elements.
///
/// The current depth is the number of open elements: right after
/// `<a><b>` has been read it is 2, right after `</b>` it is 1.
pub struct StaxContext<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<String>,
    started: bool,
    metadata_expressions: Vec<MetadataExpression>,
    metadata: HashMap<&'static str, String>,
}

impl std::fmt::Debug for StaxContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaxContext")
            .field("stack", &self.stack)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl<'a> StaxContext<'a> {
    /// Start reading `xml`.
    #[must_use]
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            stack: Vec::new(),
            started: false,
            metadata_expressions: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Capture the text of `expression` (matched like
    /// [`test_expression`](Self::test_expression) at `target_depth`) under
    /// `key`. Captured elements are consumed and never reach the caller.
    pub fn register_metadata(
        &mut self,
        key: &'static str,
        expression: &'static str,
        target_depth: usize,
    ) {
        self.metadata_expressions.push(MetadataExpression {
            key,
            expression,
            target_depth,
        });
    }

    /// Captured metadata value.
    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Whether nothing has been read yet.
    #[must_use]
    pub fn is_start_of_document(&self) -> bool {
        !self.started
    }

    /// Number of open elements.
    #[must_use]
    pub fn current_depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the element just opened is `expression` relative to
    /// `target_depth`.
    ///
    /// `"Name"` matches an element `Name` at exactly `target_depth`;
    /// `"Topics/member"` matches `member` inside `Topics` one level deeper.
    /// `"."` always matches.
    #[must_use]
    pub fn test_expression(&self, expression: &str, target_depth: usize) -> bool {
        if expression == "." {
            return true;
        }
        let segments: Vec<&str> = expression.split('/').collect();
        if self.stack.len() != target_depth + segments.len() - 1 {
            return false;
        }
        self.stack
            .iter()
            .rev()
            .zip(segments.iter().rev())
            .all(|(open, wanted)| open == wanted)
    }

    /// Read the next event, keeping the element stack in sync.
    pub fn next_event(&mut self) -> Result<XmlEvent, XmlError> {
        loop {
            let event = self.read_raw()?;
            if let XmlEvent::StartElement(_) = &event {
                if let Some(key) = self.matching_metadata() {
                    let text = self.read_text()?;
                    self.metadata.insert(key, text);
                    continue;
                }
            }
            return Ok(event);
        }
    }

    /// Read the text content of the element just opened, consuming its end
    /// tag. Entity and character references are resolved.
    pub fn read_text(&mut self) -> Result<String, XmlError> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Text(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(e) => {
                    let raw = std::str::from_utf8(&e)
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    text.push_str(raw);
                }
                Event::GeneralRef(e) => push_reference(&mut text, &e)?,
                Event::End(_) => {
                    self.stack.pop();
                    return Ok(text);
                }
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    return Err(XmlError::UnexpectedElement(format!(
                        "{name} inside text content of {}",
                        self.stack.last().map_or("document", String::as_str)
                    )));
                }
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF while reading text content".to_owned(),
                    ));
                }
                _ => {}
            }
        }
    }

    fn read_raw(&mut self) -> Result<XmlEvent, XmlError> {
        self.started = true;
        let event = match self.reader.read_event()? {
            Event::Start(e) => {
                let name = std::str::from_utf8(e.local_name().as_ref())
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                    .to_owned();
                self.stack.push(name.clone());
                XmlEvent::StartElement(name)
            }
            Event::End(_) => {
                let name = self.stack.pop().ok_or_else(|| {
                    XmlError::UnexpectedElement("end tag without matching start".to_owned())
                })?;
                XmlEvent::EndElement(name)
            }
            Event::Eof => XmlEvent::EndDocument,
            _ => XmlEvent::Other,
        };
        Ok(event)
    }

    fn matching_metadata(&self) -> Option<&'static str> {
        self.metadata_expressions
            .iter()
            .find(|m| self.test_expression(m.expression, m.target_depth))
            .map(|m| m.key)
    }
}

fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> Result<(), XmlError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|err| XmlError::ParseError(err.to_string()))?
    {
        text.push(ch);
        return Ok(());
    }
    let name = reference
        .decode()
        .map_err(|err| XmlError::ParseError(err.to_string()))?;
    match quick_xml::escape::resolve_predefined_entity(&name) {
        Some(resolved) => text.push_str(resolved),
        None => {
            return Err(XmlError::ParseError(format!("unknown entity &{name};")));
        }
    }
    Ok(())
}

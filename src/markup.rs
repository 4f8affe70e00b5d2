//! Pull based view over the XML decoder.
//!
//! Only element boundaries are of interest, so the decoder is wrapped in an iterator that yields
//! [`MarkupEvent::Start`] and [`MarkupEvent::End`] with owned names and attributes. Self-closing
//! elements are expanded into a start followed by an end.
use crate::{error::Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Size of the read buffer placed in front of the decoder
pub const BUFFSIZE: usize = 8192;

#[derive(Debug, Clone, PartialEq)]
/// An element boundary in the input
pub enum MarkupEvent {
    /// Element opening tag with its attributes
    Start {
        /// Local name of the element
        name: String,
        /// Attributes in document order
        attributes: Attributes,
    },
    /// Element closing tag
    End {
        /// Local name of the element
        name: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Attributes of an element, kept in document order so that they can be looked up both by
/// name and by position
pub struct Attributes(pub Vec<(String, String)>);

impl Attributes {
    /// Value of the attribute `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the attribute at position `idx`
    pub fn value_at(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(|(_, value)| value.as_str())
    }

    /// Name and value of the attribute at position `idx`
    pub fn entry_at(&self, idx: usize) -> Option<(&str, &str)> {
        self.0
            .get(idx)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Value of the attribute `key`, failing when it is absent from `element`
    pub fn require(&self, key: &str, element: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::MissingAttribute {
            attribute: key.to_string(),
            element: element.to_string(),
        })
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the element carries no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> std::iter::FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Iterator over the element boundaries of an XML stream
pub struct MarkupEvents<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    open: Vec<String>,
    done: bool,
}

impl<R: BufRead> std::fmt::Debug for MarkupEvents<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupEvents")
            .field("position", &self.reader.buffer_position())
            .field("open", &self.open)
            .field("done", &self.done)
            .finish()
    }
}

impl<R: BufRead> MarkupEvents<R> {
    /// Wraps a buffered reader containing XML
    pub fn new(rdr: R) -> Self {
        let mut reader = Reader::from_reader(rdr);
        reader.trim_text(true).expand_empty_elements(true);
        Self {
            reader,
            buf: Vec::with_capacity(BUFFSIZE),
            open: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for MarkupEvents<R> {
    type Item = Result<MarkupEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            let event = match self.reader.read_event(&mut self.buf) {
                Ok(Event::Start(ref start)) => {
                    to_start_event(start, self.reader.buffer_position())
                }
                Ok(Event::End(ref end)) => local_name(end.local_name())
                    .map(|name| MarkupEvent::End { name }),
                Ok(Event::Eof) => {
                    self.done = true;
                    let position = self.reader.buffer_position();
                    return self
                        .open
                        .pop()
                        .map(|element| Err(Error::UnclosedElement { position, element }));
                }
                Ok(_) => continue,
                Err(source) => Err(Error::ParseError {
                    position: self.reader.buffer_position(),
                    source,
                }),
            };

            match event {
                Ok(MarkupEvent::Start { ref name, .. }) => self.open.push(name.clone()),
                Ok(MarkupEvent::End { .. }) => {
                    self.open.pop();
                }
                Err(_) => self.done = true,
            }
            return Some(event);
        }
    }
}

fn local_name(name: &[u8]) -> Result<String> {
    Ok(std::str::from_utf8(name)?.to_string())
}

fn to_start_event(start: &BytesStart<'_>, position: usize) -> Result<MarkupEvent> {
    let name = local_name(start.local_name())?;
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| Error::ParseError { position, source })?;
        let key = std::str::from_utf8(attr.key)?.to_string();
        let value = attr.unescaped_value().map_err(|source| Error::ParseError { position, source })?;
        attributes.push((key, std::str::from_utf8(&value)?.to_string()));
    }

    Ok(MarkupEvent::Start {
        name,
        attributes: Attributes(attributes),
    })
}

//! A small owned XML tree, built with `quick_xml`'s namespace-aware reader.
//!
//! Feeds are tiny compared to the round trip that fetched them, so the whole
//! response is materialised first and entity constructors then walk the tree
//! by `(namespace, local name)` pairs. Prefixes never leak out of this module.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::{Error, Result};

pub const ATOM: &str = "http://www.w3.org/2005/Atom";
pub const GS: &str = "http://schemas.google.com/spreadsheets/2006";
pub const GSX: &str = "http://schemas.google.com/spreadsheets/2006/extended";
pub const OPENSEARCH: &str = "http://a9.com/-/spec/opensearch/1.1/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parses `xml` and returns its root element.
    ///
    /// Text is kept as sent, except whitespace-only runs between child
    /// elements. Anything but whitespace, comments and processing
    /// instructions after the root is an error.
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = NsReader::from_str(xml);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (ns, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(start) => {
                    no_second_root(&root)?;
                    stack.push(Element::open(ns, &start)?);
                }
                Event::Empty(start) => {
                    no_second_root(&root)?;
                    let element = Element::open(ns, &start)?;
                    close(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::parse("closing tag without an opening tag"))?;
                    close(&mut stack, &mut root, element);
                }
                Event::Text(text) => push_text(&mut stack, &text.unescape()?)?,
                Event::CData(data) => push_text(&mut stack, &utf8(&data.into_inner())?)?,
                Event::Eof => {
                    if let Some(open) = stack.last() {
                        return Err(Error::parse(format!(
                            "unexpected end of document inside <{}>",
                            open.name
                        )));
                    }
                    return root.ok_or_else(|| Error::parse("document has no root element"));
                }
                _ => {}
            }
        }
    }

    fn open(ns: ResolveResult, start: &BytesStart) -> Result<Element> {
        let namespace = match ns {
            ResolveResult::Bound(Namespace(uri)) => Some(utf8(uri)?),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(Error::parse(format!(
                    "undeclared namespace prefix `{}`",
                    String::from_utf8_lossy(&prefix)
                )))
            }
        };

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = utf8(attr.key.as_ref())?;
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            attributes.push((key, attr.unescape_value()?.into_owned()));
        }

        Ok(Element {
            namespace,
            name: utf8(start.local_name().as_ref())?,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name, without any prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace() == Some(namespace) && self.name == name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn required_attribute(&self, key: &str) -> Result<&str> {
        self.attribute(key).ok_or_else(|| {
            Error::parse(format!("<{}> is missing the `{key}` attribute", self.name))
        })
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(namespace, name))
    }

    pub fn child(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(namespace, name))
    }

    pub fn required_child(&self, namespace: &str, name: &str) -> Result<&Element> {
        self.child(namespace, name).ok_or_else(|| {
            Error::parse(format!("<{}> has no <{name}> element", self.name))
        })
    }

    /// Fails unless this element is `namespace:name`.
    pub fn expect(&self, namespace: &str, name: &str) -> Result<()> {
        if self.is(namespace, name) {
            Ok(())
        } else {
            Err(Error::parse(format!(
                "expected <{name}> in {namespace}, found <{}> in {}",
                self.name,
                self.namespace().unwrap_or("no namespace")
            )))
        }
    }
}

fn close(stack: &mut Vec<Element>, root: &mut Option<Element>, mut element: Element) {
    // Indentation between children.
    if !element.children.is_empty() && element.text.trim().is_empty() {
        element.text.clear();
    }

    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn no_second_root(root: &Option<Element>) -> Result<()> {
    match root {
        Some(root) => Err(Error::parse(format!("content after the closing </{}>", root.name))),
        None => Ok(()),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(current) => current.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(Error::parse(format!("text outside the root element: {:?}", text.trim()))),
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| Error::parse(e.to_string()))
}

/// Parses a non-negative number, naming `what` in the error.
pub(crate) fn parse_number<T: FromStr>(what: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::parse(format!("invalid {what}: {raw:?}")))
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|e| Error::parse(format!("invalid timestamp {raw:?}: {e}")))
}

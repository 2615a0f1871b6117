//! # Markup Parsing
//!
//! Turns an SVG string into a small element tree and checks that its document
//! element is `<svg>`. Bare fragments such as `<rect .../><circle .../>` are
//! wrapped in a synthetic root first, so callers can paste shapes without a
//! surrounding document.
//!
//! The tree keeps only elements and their attributes. Text, comments and
//! processing instructions are dropped; nothing downstream reads them.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{ConvertError, Options};

/// Qualified name of the expected document element.
pub const ROOT_TAG: &str = "svg";

/// One parsed element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    /// Attributes in source order, values entity-unescaped.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up an attribute by exact name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }
}

/// Anything that can turn markup text into an [`Element`] tree.
///
/// Implementations must reject input that is not well-formed XML with
/// [`ConvertError::Parse`], and must return the document element itself
/// (or [`ConvertError::MissingRoot`] when there is none). Checking the root's
/// tag name is left to [`parse_document`].
pub trait MarkupParser {
    fn parse(&self, source: &str) -> Result<Element, ConvertError>;
}

/// Default parser backed by `quick-xml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl MarkupParser for XmlParser {
    fn parse(&self, source: &str) -> Result<Element, ConvertError> {
        let mut reader = Reader::from_str(source);
        reader.config_mut().check_end_names = true;

        // Open elements, innermost last.
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                ConvertError::parse(format!("{} at byte {}", e, reader.error_position()))
            })?;

            match event {
                Event::Start(e) => {
                    reject_after_root(&root, &stack, reader.buffer_position())?;
                    stack.push(element_from(&e)?);
                }
                Event::Empty(e) => {
                    reject_after_root(&root, &stack, reader.buffer_position())?;
                    let element = element_from(&e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                Event::End(_) => {
                    // check_end_names guarantees the names match, and an
                    // unmatched end tag is already an error from the reader.
                    let Some(element) = stack.pop() else {
                        return Err(ConvertError::parse(format!(
                            "unexpected closing tag at byte {}",
                            reader.buffer_position()
                        )));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    if stack.is_empty() && !text.iter().all(|b| b.is_ascii_whitespace()) {
                        return Err(ConvertError::parse(format!(
                            "text outside the document element at byte {}",
                            reader.buffer_position()
                        )));
                    }
                }
                Event::CData(_) if stack.is_empty() => {
                    return Err(ConvertError::parse(format!(
                        "CDATA outside the document element at byte {}",
                        reader.buffer_position()
                    )));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ConvertError::parse(format!(
                "unexpected end of input: <{}> is never closed",
                open.name
            )));
        }

        root.ok_or(ConvertError::MissingRoot { found: None })
    }
}

fn reject_after_root(
    root: &Option<Element>,
    stack: &[Element],
    position: impl std::fmt::Display,
) -> Result<(), ConvertError> {
    if root.is_some() && stack.is_empty() {
        return Err(ConvertError::parse(format!(
            "more than one document element (second starts near byte {})",
            position
        )));
    }
    Ok(())
}

fn element_from(start: &BytesStart) -> Result<Element, ConvertError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ConvertError::parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ConvertError::parse(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Whether `input` already carries its own document element (or a prolog in
/// front of one) rather than being a bare run of shapes.
pub fn is_full_document(input: &str) -> bool {
    let head: String = input
        .trim_start()
        .chars()
        .take(9)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<svg")
        || head.starts_with("<?xml")
        || head.starts_with("<!doctype")
}

/// Parse `input` into its `<svg>` root, wrapping bare fragments first.
pub fn parse_document(
    input: &str,
    options: &Options,
    parser: &impl MarkupParser,
) -> Result<Element, ConvertError> {
    let root = if is_full_document(input) {
        parser.parse(input)?
    } else {
        tracing::trace!("input has no <svg> root, wrapping fragment");
        let wrapped = format!(
            r#"<{ROOT_TAG} xmlns="{}">{}</{ROOT_TAG}>"#,
            options.namespace, input
        );
        parser.parse(&wrapped)?
    };

    if !root.name.eq_ignore_ascii_case(ROOT_TAG) {
        return Err(ConvertError::MissingRoot {
            found: Some(root.name),
        });
    }
    Ok(root)
}

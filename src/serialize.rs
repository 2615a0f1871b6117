//! Markup output.
//!
//! Writes an [`Element`] tree with `quick_xml::Writer`. Attribute values are
//! escaped and double-quoted, and childless elements are self-closing.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

use crate::markup::Element;
use crate::ConvertError;

/// Serialize `root` to a string, indenting by `indent` spaces per level when set.
pub fn to_markup(root: &Element, indent: Option<usize>) -> Result<String, ConvertError> {
    let bytes = match indent {
        Some(n) => {
            let mut writer = Writer::new_with_indent(Vec::new(), b' ', n);
            write_element(&mut writer, root)?;
            writer.into_inner()
        }
        None => {
            let mut writer = Writer::new(Vec::new());
            write_element(&mut writer, root)?;
            writer.into_inner()
        }
    };
    String::from_utf8(bytes)
        .map_err(|e| ConvertError::Serialize(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &Element) -> Result<(), ConvertError> {
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &el.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
    Ok(())
}

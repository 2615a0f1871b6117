//! # pathmerge
//!
//! Flattens the basic SVG shapes in a document into one `<path>`.
//!
//! Icon sets often mix `<rect>`, `<circle>`, `<polyline>` and friends. Many
//! consumers (icon fonts, CSS masks, canvas renderers) only take a single path
//! string. pathmerge rewrites every primitive as path data, joins it in
//! document order, and wraps the result in a clean `<svg>` that keeps the
//! original canvas.
//!
//! ## Architecture
//!
//! ```text
//! Input (SVG document or bare fragment)
//!       ↓
//!   [markup]     — Wrap fragments, parse, check the <svg> root
//!       ↓
//!   [shapes]     — One translator per primitive → path data
//!       ↓
//!   [combine]    — Join path data, carry canvas + first style over
//!       ↓
//!   [serialize]  — Write the output document
//! ```
//!
//! Conversion is best effort per shape. A shape with missing or invalid
//! geometry is left out and listed in [`Conversion::skipped`]. Only markup
//! that cannot be parsed, or that has no `<svg>` root, fails the whole call.

pub mod combine;
pub mod error;
pub mod markup;
pub mod options;
pub mod serialize;
pub mod shapes;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::ConvertError;
pub use options::Options;

use serde::Serialize;

use combine::TranslatedShape;
use markup::{MarkupParser, XmlParser};
use shapes::{ShapeKind, SkipReason};

/// The result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// The normalized output document.
    pub svg: String,
    /// The combined `d` value on its own.
    pub path_data: String,
    /// Shapes that contributed nothing, in document order.
    pub skipped: Vec<SkippedShape>,
}

/// A recognized shape left out of the combined path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedShape {
    /// Position among the root's direct child elements.
    pub index: usize,
    pub kind: ShapeKind,
    pub reason: SkipReason,
}

/// Convert SVG markup to a single combined path with default options.
pub fn convert(input: &str) -> Result<Conversion, ConvertError> {
    convert_with(input, &Options::default(), &XmlParser)
}

/// Convert SVG markup with explicit options and markup parser.
pub fn convert_with(
    input: &str,
    options: &Options,
    parser: &impl MarkupParser,
) -> Result<Conversion, ConvertError> {
    let root = markup::parse_document(input, options, parser)?;
    let nf = options.number_format();

    let mut translated = Vec::with_capacity(root.children.len());
    let mut skipped = Vec::new();

    for (index, child) in root.children.iter().enumerate() {
        let Some(kind) = ShapeKind::from_tag(&child.name) else {
            tracing::trace!(index, tag = %child.name, "ignoring unsupported element");
            continue;
        };
        let result = shapes::translate(kind, child, &nf);
        if let Err(reason) = &result {
            tracing::debug!(index, %kind, %reason, "skipping shape");
            skipped.push(SkippedShape {
                index,
                kind,
                reason: reason.clone(),
            });
        }
        translated.push(TranslatedShape {
            kind,
            element: child,
            result,
        });
    }

    let output = combine::combine(&root, &translated, options);
    let path_data = output
        .children
        .first()
        .and_then(|path| path.attr("d"))
        .unwrap_or_default()
        .to_string();
    let svg = serialize::to_markup(&output, options.indent)?;

    Ok(Conversion {
        svg,
        path_data,
        skipped,
    })
}

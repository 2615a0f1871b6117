//! Path combining and style propagation.
//!
//! Builds the output document: an `<svg>` root carrying the input's canvas
//! attributes and a single `<path>` whose data is every translated shape joined
//! in document order.

use crate::markup::{Element, ROOT_TAG};
use crate::shapes::{ShapeKind, Translation};
use crate::Options;

/// Root attributes carried over to the output, in output order.
pub const ROOT_ATTRIBUTES: [&str; 4] = ["xmlns", "viewBox", "width", "height"];

/// Presentation attributes copied from the style source, in output order.
pub const STYLE_ATTRIBUTES: [&str; 8] = [
    "fill",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "fill-rule",
    "stroke-dasharray",
    "stroke-dashoffset",
];

/// A recognized shape and what its translator produced.
#[derive(Debug, Clone)]
pub struct TranslatedShape<'a> {
    pub kind: ShapeKind,
    pub element: &'a Element,
    pub result: Translation,
}

/// Join the non-blank path strings with single spaces.
pub fn join_path_data<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the output document from the input root and its translated shapes.
pub fn combine(root: &Element, shapes: &[TranslatedShape<'_>], options: &Options) -> Element {
    let mut out = Element::new(ROOT_TAG);
    for name in ROOT_ATTRIBUTES {
        if let Some(value) = root.attr(name) {
            out.set_attr(name, value);
        }
    }

    let d = join_path_data(
        shapes
            .iter()
            .filter_map(|s| s.result.as_ref().ok())
            .map(String::as_str),
    );

    let mut path = Element::new(ShapeKind::Path.tag());
    path.set_attr("d", d);

    let style_source = shapes
        .iter()
        .map(|s| s.element)
        .find(|el| el.has_attr("fill") || el.has_attr("stroke"));

    match style_source {
        Some(source) => {
            for name in STYLE_ATTRIBUTES {
                if let Some(value) = source.attr(name) {
                    path.set_attr(name, value);
                }
            }
        }
        None => {
            path.set_attr("fill", options.default_fill.as_str());
            path.set_attr("stroke", options.default_stroke.as_str());
        }
    }

    out.children.push(path);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SkipReason;

    fn shape(name: &str, attrs: &[(&str, &str)]) -> Element {
        let mut e = Element::new(name);
        for (k, v) in attrs {
            e.set_attr(k, *v);
        }
        e
    }

    fn translated<'a>(el: &'a Element, result: Translation) -> TranslatedShape<'a> {
        TranslatedShape {
            kind: ShapeKind::from_tag(&el.name).unwrap(),
            element: el,
            result,
        }
    }

    #[test]
    fn test_join_skips_blank_and_trims() {
        assert_eq!(join_path_data(["A", "", "  ", " B "]), "A B");
        assert_eq!(join_path_data(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_copies_only_present_root_attributes() {
        let root = shape(
            "svg",
            &[("viewBox", "0 0 24 24"), ("class", "icon"), ("xmlns", "x")],
        );
        let out = combine(&root, &[], &Options::default());
        assert_eq!(
            out.attributes,
            vec![
                ("xmlns".to_string(), "x".to_string()),
                ("viewBox".to_string(), "0 0 24 24".to_string())
            ]
        );
    }

    #[test]
    fn test_no_shapes_gives_empty_d_and_default_style() {
        let out = combine(&Element::new("svg"), &[], &Options::default());
        assert_eq!(out.children.len(), 1);
        let path = &out.children[0];
        assert_eq!(path.attr("d"), Some(""));
        assert_eq!(path.attr("fill"), Some("none"));
        assert_eq!(path.attr("stroke"), Some("currentColor"));
        assert_eq!(path.attributes.len(), 3);
    }

    #[test]
    fn test_first_styled_shape_wins() {
        let plain = shape("path", &[("d", "M0 0")]);
        let red = shape(
            "rect",
            &[("fill", "red"), ("stroke-width", "2"), ("opacity", "0.5")],
        );
        let blue = shape("circle", &[("stroke", "blue")]);
        let shapes = [
            translated(&plain, Ok("M0 0".into())),
            translated(&red, Err(SkipReason::MissingAttribute("width"))),
            translated(&blue, Ok("M 1 1".into())),
        ];
        let out = combine(&Element::new("svg"), &shapes, &Options::default());
        let path = &out.children[0];
        assert_eq!(path.attr("d"), Some("M0 0 M 1 1"));
        assert_eq!(path.attr("fill"), Some("red"));
        assert_eq!(path.attr("stroke-width"), Some("2"));
        assert_eq!(path.attr("stroke"), None);
        assert_eq!(path.attr("opacity"), None);
    }

    #[test]
    fn test_style_attributes_follow_fixed_order() {
        let el = shape(
            "path",
            &[("stroke-linecap", "round"), ("stroke", "#000"), ("fill", "none")],
        );
        let shapes = [translated(&el, Ok("M0 0".into()))];
        let out = combine(&Element::new("svg"), &shapes, &Options::default());
        let names: Vec<&str> = out.children[0]
            .attributes
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(names, ["d", "fill", "stroke", "stroke-linecap"]);
    }

    #[test]
    fn test_configured_default_style() {
        let options = Options {
            default_fill: "black".to_string(),
            default_stroke: "none".to_string(),
            ..Options::default()
        };
        let out = combine(&Element::new("svg"), &[], &options);
        assert_eq!(out.children[0].attr("fill"), Some("black"));
        assert_eq!(out.children[0].attr("stroke"), Some("none"));
    }
}

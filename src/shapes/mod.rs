//! # Shape Translators
//!
//! One function per SVG primitive, each turning the element's attributes into
//! path data. Translation is best effort: a shape with missing or unusable
//! geometry returns a [`SkipReason`] instead of a path, and the caller leaves
//! it out of the combined output rather than failing the whole document.
//!
//! Arcs are written in SVG's endpoint form (`A rx ry rotation large sweep x y`),
//! so circles, ellipses and rounded corners stay exact instead of being
//! approximated with curves.

mod number;

pub use number::{parse_number, NumberFormat};

use serde::Serialize;
use std::fmt;

use crate::markup::Element;

/// The primitives the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Path,
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
}

impl ShapeKind {
    /// Map an element's tag name to a shape kind. Unknown tags return `None`.
    pub fn from_tag(name: &str) -> Option<Self> {
        Some(match name {
            "path" => ShapeKind::Path,
            "rect" => ShapeKind::Rect,
            "circle" => ShapeKind::Circle,
            "ellipse" => ShapeKind::Ellipse,
            "line" => ShapeKind::Line,
            "polyline" => ShapeKind::Polyline,
            "polygon" => ShapeKind::Polygon,
            _ => return None,
        })
    }

    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Path => "path",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Why a shape produced no path data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "attribute", rename_all = "camelCase")]
pub enum SkipReason {
    /// A required attribute is absent (or blank, for `d`).
    MissingAttribute(&'static str),
    /// A required attribute has no numeric value.
    NotANumber(&'static str),
    /// A size or radius is zero or negative.
    NonPositive(&'static str),
    /// `points` holds fewer than two coordinate pairs.
    TooFewPoints,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAttribute(name) => write!(f, "missing `{}`", name),
            SkipReason::NotANumber(name) => write!(f, "`{}` is not a number", name),
            SkipReason::NonPositive(name) => write!(f, "`{}` must be positive", name),
            SkipReason::TooFewPoints => f.write_str("fewer than two points"),
        }
    }
}

pub type Translation = Result<String, SkipReason>;

/// Translate one shape element into path data.
pub fn translate(kind: ShapeKind, el: &Element, nf: &NumberFormat) -> Translation {
    match kind {
        ShapeKind::Path => path_data(el),
        ShapeKind::Rect => rect_data(el, nf),
        ShapeKind::Circle => circle_data(el, nf),
        ShapeKind::Ellipse => ellipse_data(el, nf),
        ShapeKind::Line => line_data(el),
        ShapeKind::Polyline => poly_data(el, nf, false),
        ShapeKind::Polygon => poly_data(el, nf, true),
    }
}

// ─── Attribute helpers ──────────────────────────────────────────

fn required(el: &Element, name: &'static str) -> Result<f64, SkipReason> {
    let raw = el.attr(name).ok_or(SkipReason::MissingAttribute(name))?;
    parse_number(raw).ok_or(SkipReason::NotANumber(name))
}

fn positive(el: &Element, name: &'static str) -> Result<f64, SkipReason> {
    let v = required(el, name)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SkipReason::NonPositive(name))
    }
}

/// Optional coordinate: absent or unreadable means 0.
fn coord_or_zero(el: &Element, name: &str) -> f64 {
    el.attr(name).and_then(parse_number).unwrap_or(0.0)
}

/// Optional corner radius: absent, unreadable or negative means unset.
fn radius(el: &Element, name: &str) -> Option<f64> {
    el.attr(name).and_then(parse_number).filter(|r| *r >= 0.0)
}

// ─── Translators ────────────────────────────────────────────────

/// `<path>`: the `d` attribute passes through untouched.
pub fn path_data(el: &Element) -> Translation {
    match el.attr("d") {
        Some(d) if !d.trim().is_empty() => Ok(d.to_string()),
        _ => Err(SkipReason::MissingAttribute("d")),
    }
}

/// `<rect>`, with optional rounded corners.
pub fn rect_data(el: &Element, nf: &NumberFormat) -> Translation {
    let w = positive(el, "width")?;
    let h = positive(el, "height")?;
    let x = coord_or_zero(el, "x");
    let y = coord_or_zero(el, "y");

    let (rx, ry) = match (radius(el, "rx"), radius(el, "ry")) {
        (None, None) => (0.0, 0.0),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (Some(rx), Some(ry)) => (rx, ry),
    };
    let limit = w.min(h) / 2.0;
    let rx = rx.min(w / 2.0).min(limit);
    let ry = ry.min(h / 2.0).min(limit);

    let n = |v: f64| nf.fmt(v);

    if rx == 0.0 || ry == 0.0 {
        return Ok(format!(
            "M {} {} H {} V {} H {} Z",
            n(x),
            n(y),
            n(x + w),
            n(y + h),
            n(x)
        ));
    }

    let arc = format!("A {} {} 0 0 1", n(rx), n(ry));
    Ok(format!(
        "M {} {} H {} {arc} {} {} V {} {arc} {} {} H {} {arc} {} {} V {} {arc} {} {} Z",
        n(x + rx),
        n(y),
        n(x + w - rx),
        n(x + w),
        n(y + ry),
        n(y + h - ry),
        n(x + w - rx),
        n(y + h),
        n(x + rx),
        n(x),
        n(y + h - ry),
        n(y + ry),
        n(x + rx),
        n(y),
    ))
}

/// `<circle>`: two half-circle arcs, left extreme to right and back.
pub fn circle_data(el: &Element, nf: &NumberFormat) -> Translation {
    let cx = required(el, "cx")?;
    let cy = required(el, "cy")?;
    let r = positive(el, "r")?;
    Ok(two_arc_loop(cx, cy, r, r, nf))
}

/// `<ellipse>`: like a circle with separate radii.
pub fn ellipse_data(el: &Element, nf: &NumberFormat) -> Translation {
    let cx = required(el, "cx")?;
    let cy = required(el, "cy")?;
    let rx = positive(el, "rx")?;
    let ry = positive(el, "ry")?;
    Ok(two_arc_loop(cx, cy, rx, ry, nf))
}

fn two_arc_loop(cx: f64, cy: f64, rx: f64, ry: f64, nf: &NumberFormat) -> String {
    let n = |v: f64| nf.fmt(v);
    let arc = format!("A {} {} 0 1 0", n(rx), n(ry));
    format!(
        "M {left} {cy} {arc} {right} {cy} {arc} {left} {cy} Z",
        left = n(cx - rx),
        right = n(cx + rx),
        cy = n(cy),
    )
}

/// `<line>`: endpoints are copied as written, without numeric checks.
pub fn line_data(el: &Element) -> Translation {
    let get = |name: &'static str| el.attr(name).ok_or(SkipReason::MissingAttribute(name));
    let (x1, y1, x2, y2) = (get("x1")?, get("y1")?, get("x2")?, get("y2")?);
    Ok(format!("M {} {} L {} {}", x1, y1, x2, y2))
}

/// `<polyline>` and `<polygon>`; only the polygon is closed.
pub fn poly_data(el: &Element, nf: &NumberFormat, close: bool) -> Translation {
    let raw = el.attr("points").unwrap_or_default();
    let points = parse_points(raw)?;
    if points.len() < 2 {
        return Err(SkipReason::TooFewPoints);
    }

    let mut parts = Vec::with_capacity(points.len() + 1);
    for (i, (px, py)) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        parts.push(format!("{} {} {}", cmd, nf.fmt(*px), nf.fmt(*py)));
    }
    if close {
        parts.push("Z".to_string());
    }
    Ok(parts.join(" "))
}

/// Parse a `points` list like `"0,0 10,0 10,10"`. A dangling odd coordinate
/// is dropped.
fn parse_points(s: &str) -> Result<Vec<(f64, f64)>, SkipReason> {
    let nums = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| parse_number(t).ok_or(SkipReason::NotANumber("points")))
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(nums
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str, attrs: &[(&str, &str)]) -> Element {
        let mut e = Element::new(name);
        for (k, v) in attrs {
            e.set_attr(k, *v);
        }
        e
    }

    fn run(name: &str, attrs: &[(&str, &str)]) -> Translation {
        let kind = ShapeKind::from_tag(name).unwrap();
        translate(kind, &el(name, attrs), &NumberFormat::default())
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(ShapeKind::from_tag("polygon"), Some(ShapeKind::Polygon));
        assert_eq!(ShapeKind::from_tag("g"), None);
        assert_eq!(ShapeKind::from_tag("RECT"), None);
        assert_eq!(ShapeKind::Ellipse.to_string(), "ellipse");
    }

    #[test]
    fn test_path_passthrough() {
        assert_eq!(run("path", &[("d", "M0 0L5 5")]).unwrap(), "M0 0L5 5");
        assert_eq!(
            run("path", &[("d", "  ")]),
            Err(SkipReason::MissingAttribute("d"))
        );
        assert_eq!(run("path", &[]), Err(SkipReason::MissingAttribute("d")));
    }

    #[test]
    fn test_rect_straight() {
        let d = run(
            "rect",
            &[("x", "1"), ("y", "2"), ("width", "10"), ("height", "4")],
        )
        .unwrap();
        assert_eq!(d, "M 1 2 H 11 V 6 H 1 Z");
    }

    #[test]
    fn test_rect_position_defaults_to_origin() {
        let d = run(
            "rect",
            &[("x", "left"), ("width", "3"), ("height", "3")],
        )
        .unwrap();
        assert_eq!(d, "M 0 0 H 3 V 3 H 0 Z");
    }

    #[test]
    fn test_rect_rounded() {
        let d = run(
            "rect",
            &[("width", "10"), ("height", "8"), ("rx", "2"), ("ry", "1")],
        )
        .unwrap();
        assert_eq!(
            d,
            "M 2 0 H 8 A 2 1 0 0 1 10 1 V 7 A 2 1 0 0 1 8 8 H 2 A 2 1 0 0 1 0 7 V 1 A 2 1 0 0 1 2 0 Z"
        );
    }

    #[test]
    fn test_rect_single_radius_is_mirrored() {
        let only_rx = run("rect", &[("width", "10"), ("height", "10"), ("rx", "3")]).unwrap();
        let only_ry = run("rect", &[("width", "10"), ("height", "10"), ("ry", "3")]).unwrap();
        assert_eq!(only_rx, only_ry);
        assert!(only_rx.starts_with("M 3 0 H 7 A 3 3 0 0 1 10 3"));
    }

    #[test]
    fn test_rect_radius_clamped_to_smaller_half() {
        let d = run(
            "rect",
            &[("width", "10"), ("height", "4"), ("rx", "10"), ("ry", "10")],
        )
        .unwrap();
        assert_eq!(
            d,
            "M 2 0 H 8 A 2 2 0 0 1 10 2 V 2 A 2 2 0 0 1 8 4 H 2 A 2 2 0 0 1 0 2 V 2 A 2 2 0 0 1 2 0 Z"
        );
    }

    #[test]
    fn test_rect_zero_radius_is_straight() {
        let d = run(
            "rect",
            &[("width", "5"), ("height", "5"), ("rx", "0"), ("ry", "2")],
        )
        .unwrap();
        assert_eq!(d, "M 0 0 H 5 V 5 H 0 Z");
    }

    #[test]
    fn test_rect_rejects_bad_size() {
        assert_eq!(
            run("rect", &[("width", "0"), ("height", "4")]),
            Err(SkipReason::NonPositive("width"))
        );
        assert_eq!(
            run("rect", &[("width", "4"), ("height", "-1")]),
            Err(SkipReason::NonPositive("height"))
        );
        assert_eq!(
            run("rect", &[("width", "wide"), ("height", "4")]),
            Err(SkipReason::NotANumber("width"))
        );
        assert_eq!(
            run("rect", &[("height", "4")]),
            Err(SkipReason::MissingAttribute("width"))
        );
    }

    #[test]
    fn test_circle() {
        let d = run("circle", &[("cx", "12"), ("cy", "12"), ("r", "10")]).unwrap();
        assert_eq!(d, "M 2 12 A 10 10 0 1 0 22 12 A 10 10 0 1 0 2 12 Z");
    }

    #[test]
    fn test_circle_rejects_zero_or_missing_radius() {
        assert_eq!(
            run("circle", &[("cx", "1"), ("cy", "1"), ("r", "0")]),
            Err(SkipReason::NonPositive("r"))
        );
        assert_eq!(
            run("circle", &[("cx", "1"), ("cy", "1")]),
            Err(SkipReason::MissingAttribute("r"))
        );
        assert_eq!(
            run("circle", &[("cy", "1"), ("r", "2")]),
            Err(SkipReason::MissingAttribute("cx"))
        );
    }

    #[test]
    fn test_ellipse() {
        let d = run(
            "ellipse",
            &[("cx", "10"), ("cy", "5"), ("rx", "4"), ("ry", "2.5")],
        )
        .unwrap();
        assert_eq!(d, "M 6 5 A 4 2.5 0 1 0 14 5 A 4 2.5 0 1 0 6 5 Z");
        assert_eq!(
            run("ellipse", &[("cx", "10"), ("cy", "5"), ("rx", "4"), ("ry", "0")]),
            Err(SkipReason::NonPositive("ry"))
        );
    }

    #[test]
    fn test_line_keeps_raw_values() {
        let d = run(
            "line",
            &[("x1", "0"), ("y1", "1.50"), ("x2", "auto"), ("y2", "3")],
        )
        .unwrap();
        assert_eq!(d, "M 0 1.50 L auto 3");
        assert_eq!(
            run("line", &[("x1", "0"), ("y1", "0"), ("x2", "1")]),
            Err(SkipReason::MissingAttribute("y2"))
        );
    }

    #[test]
    fn test_polyline_and_polygon() {
        let attrs = [("points", "0,0 10,0 10,10")];
        assert_eq!(run("polyline", &attrs).unwrap(), "M 0 0 L 10 0 L 10 10");
        assert_eq!(run("polygon", &attrs).unwrap(), "M 0 0 L 10 0 L 10 10 Z");
    }

    #[test]
    fn test_points_separators_and_odd_tail() {
        let d = run("polyline", &[("points", " 1 2,3 ,4\n5")]).unwrap();
        assert_eq!(d, "M 1 2 L 3 4");
    }

    #[test]
    fn test_poly_rejects_short_or_bad_points() {
        assert_eq!(
            run("polygon", &[("points", "1,2")]),
            Err(SkipReason::TooFewPoints)
        );
        assert_eq!(run("polyline", &[]), Err(SkipReason::TooFewPoints));
        assert_eq!(
            run("polyline", &[("points", "0,0 x,1")]),
            Err(SkipReason::NotANumber("points"))
        );
    }

    #[test]
    fn test_precision_applies_to_computed_coordinates() {
        let nf = NumberFormat { precision: Some(2) };
        let circle = el("circle", &[("cx", "0.333333"), ("cy", "0"), ("r", "1")]);
        assert_eq!(
            translate(ShapeKind::Circle, &circle, &nf).unwrap(),
            "M -0.67 0 A 1 1 0 1 0 1.33 0 A 1 1 0 1 0 -0.67 0 Z"
        );
    }
}

//! SVG geometry helpers for drawing laid-out diagrams.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use content::diagram::PlacedNode;
use content::diagram::ast::{EdgeStyle, NodeShape};

/// Vertical distance between the label row and the caption row.
const CAPTION_OFFSET: f64 = 18.0;
/// Depth of the elliptical cap on cylinder nodes.
const CYLINDER_CAP: f64 = 8.0;

/// Id of the arrowhead marker for a diagram. Scoped so several diagrams can
/// share one document.
#[must_use]
pub fn marker_id(scope: &str) -> String {
    format!("{scope}-arrow")
}

/// `url(#...)` reference to the arrowhead marker.
#[must_use]
pub fn marker_url(scope: &str) -> String {
    format!("url(#{})", marker_id(scope))
}

/// Corner radius for a rectangular node: round nodes get pill ends.
#[must_use]
pub fn corner_radius(node: &PlacedNode) -> f64 {
    match node.shape {
        NodeShape::Round => node.height / 2.0,
        _ => 8.0,
    }
}

/// Outline of a cylinder: body plus the visible front of the top cap.
#[must_use]
pub fn cylinder_path(node: &PlacedNode) -> String {
    let (x, y, w, h) = (node.x, node.y, node.width, node.height);
    let rx = w / 2.0;
    let ry = CYLINDER_CAP;
    let bottom = y + h - ry;
    format!(
        "M{x},{top} A{rx},{ry} 0 0 0 {right},{top} A{rx},{ry} 0 0 0 {x},{top} L{x},{bottom} \
         A{rx},{ry} 0 0 0 {right},{bottom} L{right},{top}",
        top = y + ry,
        right = x + w,
    )
}

/// Corner points of a rhombus inscribed in the node's box.
#[must_use]
pub fn rhombus_points(node: &PlacedNode) -> String {
    let c = node.center();
    format!(
        "{},{} {},{} {},{} {},{}",
        c.x,
        node.y,
        node.x + node.width,
        c.y,
        c.x,
        node.y + node.height,
        node.x,
        c.y
    )
}

/// `stroke-dasharray` for an edge, if any.
#[must_use]
pub fn dash_array(style: EdgeStyle) -> Option<&'static str> {
    match style {
        EdgeStyle::Dotted => Some("4 4"),
        EdgeStyle::Solid | EdgeStyle::Open | EdgeStyle::Thick => None,
    }
}

#[must_use]
pub fn stroke_width(style: EdgeStyle) -> f64 {
    match style {
        EdgeStyle::Thick => 3.5,
        EdgeStyle::Solid | EdgeStyle::Open | EdgeStyle::Dotted => 2.0,
    }
}

/// Baselines for the label and optional caption, centered in the node.
#[must_use]
pub fn text_rows(node: &PlacedNode) -> (f64, Option<f64>) {
    let cy = node.center().y;
    if node.caption.is_some() {
        (cy - CAPTION_OFFSET / 2.0, Some(cy + CAPTION_OFFSET / 2.0))
    } else {
        (cy, None)
    }
}

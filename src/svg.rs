//! The SVG tag catalogue.
//!
//! SVG shapes are the same [`Node`] type as HTML elements; the [`svg`]
//! wrapper embeds them into an HTML document. Shapes are childless elements
//! decorated with their geometry attributes, so `circle(40).center(50.0,
//! 50.0)` renders `<circle r="40" cx="50" cy="50"/>`.

use std::fmt::Write;

use compact_str::{CompactString, format_compact};

use crate::node::Node;

/// The `<svg>` container element.
pub fn svg(child: impl Into<Node>) -> Node {
    Node::element("svg", child)
}

/// A `<g>` element grouping shapes so attributes apply to all of them.
pub fn group(child: impl Into<Node>) -> Node {
    Node::element("g", child)
}

/// A `<circle/>` with the given radius.
pub fn circle(radius: u32) -> Node {
    Node::void("circle").attr("r", format_compact!("{radius}"))
}

/// An `<ellipse/>` with horizontal and vertical radii.
pub fn ellipse(horizontal_radius: u32, vertical_radius: u32) -> Node {
    Node::void("ellipse")
        .attr("rx", format_compact!("{horizontal_radius}"))
        .attr("ry", format_compact!("{vertical_radius}"))
}

/// A `<rect/>` with the given dimensions.
pub fn rectangle(width: u32, height: u32) -> Node {
    Node::void("rect")
        .attr("width", format_compact!("{width}"))
        .attr("height", format_compact!("{height}"))
}

/// A `<line/>` between two points.
pub fn line(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Node {
    Node::void("line")
        .attr("x1", format_compact!("{start_x}"))
        .attr("y1", format_compact!("{start_y}"))
        .attr("x2", format_compact!("{end_x}"))
        .attr("y2", format_compact!("{end_y}"))
}

/// A closed `<polygon/>` through the given points.
pub fn polygon(points: &[(f64, f64)]) -> Node {
    Node::void("polygon").attr("points", format_points(points))
}

/// An open `<polyline/>` through the given points.
pub fn polyline(points: &[(f64, f64)]) -> Node {
    Node::void("polyline").attr("points", format_points(points))
}

/// A `<text>` element drawing its value, collapsed onto one line.
pub fn text(value: impl Into<CompactString>) -> Node {
    Node::inline("text", value)
}

fn format_points(points: &[(f64, f64)]) -> CompactString {
    let mut out = CompactString::default();
    for (index, (x, y)) in points.iter().enumerate() {
        if index > 0 {
            let _ = write!(out, " ");
        }
        let _ = write!(out, "{x},{y}");
    }
    out
}

impl Node {
    /// Position a shape by its top-left corner: `x`/`y` attributes.
    pub fn position(self, left: f64, top: f64) -> Node {
        self.attr("x", format_compact!("{left}"))
            .attr("y", format_compact!("{top}"))
    }

    /// Position a shape by its center: `cx`/`cy` attributes.
    pub fn center(self, center_x: f64, center_y: f64) -> Node {
        self.attr("cx", format_compact!("{center_x}"))
            .attr("cy", format_compact!("{center_y}"))
    }
}

// =============================================================================
// Tests
// =============================================================================

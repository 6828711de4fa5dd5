//! SVG rendering of issue layouts.
//!
//! Every node becomes a link to its issue wrapping a rounded rectangle and a
//! two-line caption. Edges are straight lines from the bottom of the parent
//! to the top of the child, ending in an arrow. A color legend sits in the
//! bottom-right corner.

use std::io::Write;

use log::{debug, error};
use svg::{
    Document, Node,
    node::{
        self,
        element::{Definitions, Element, Line, Marker, Path, Rectangle, TSpan, Text},
    },
};

use issue_graph_core::{color::Color, geometry::Point};

use crate::{
    export,
    layout::{Edge, Layout, PositionedNode},
};

/// Document title shown by viewers.
pub const TITLE: &str = "GitHub Issue Relationships";

/// Characters of the title shown on each caption line.
const CAPTION_LINE_CHARS: usize = 20;
const EDGE_COLOR: &str = "#666666";
const OUTLINE_COLOR: &str = "#000000";
const ARROW_ID: &str = "arrow";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// SVG exporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Svg;

impl Svg {
    pub fn new() -> Self {
        Self
    }

    /// Build the SVG document for a layout.
    pub fn render_document(&self, layout: &Layout) -> Document {
        let canvas = layout.canvas();

        let mut doc = Document::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("xmlns:xlink", "http://www.w3.org/1999/xlink");

        let mut title = Element::new("title");
        title.append(node::Text::new(TITLE));
        doc = doc.add(title).add(arrow_definitions());

        for positioned in layout.nodes() {
            doc = doc.add(render_node(positioned));
        }

        for edge in layout.edges() {
            if let Some(line) = render_edge(layout, edge) {
                doc = doc.add(line);
            }
        }

        for (swatch, label) in legend(canvas.width(), canvas.height()) {
            doc = doc.add(swatch).add(label);
        }

        doc
    }
}

impl export::Exporter for Svg {
    fn export_layout(&self, layout: &Layout, writer: &mut dyn Write) -> Result<(), export::Error> {
        let doc = self.render_document(layout);
        debug!(nodes_count = layout.len(); "SVG document rendered");

        if let Err(err) = writeln!(writer, "{XML_DECLARATION}").and_then(|()| write!(writer, "{doc}"))
        {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

fn arrow_definitions() -> Definitions {
    let arrow = Marker::new()
        .set("id", ARROW_ID)
        .set("markerWidth", 10)
        .set("markerHeight", 10)
        .set("refX", 9)
        .set("refY", 3)
        .set("orient", "auto")
        .set("markerUnits", "strokeWidth")
        .add(
            Path::new()
                .set("d", "M0,0 L0,6 L9,3 z")
                .set("fill", EDGE_COLOR),
        );

    Definitions::new().add(arrow)
}

/// Renders a node as `<a>` around its rectangle and caption.
fn render_node(positioned: &PositionedNode) -> Element {
    let center = positioned.position();
    let size = positioned.size();
    let corner = positioned.bounds().min_point();

    let rect = Rectangle::new()
        .set("x", corner.x())
        .set("y", corner.y())
        .set("width", size.width())
        .set("height", size.height())
        .set("rx", 5)
        .set("ry", 5)
        .set("fill", positioned.color())
        .set("stroke", OUTLINE_COLOR)
        .set("stroke-width", 1);

    let (first, rest) = caption_lines(positioned.title());
    let mut text = Text::new("")
        .set("x", center.x())
        .set("y", center.y().saturating_add(5))
        .set("font-family", "Arial")
        .set("font-size", 14)
        .set("text-anchor", "middle")
        .set("fill", positioned.color().contrasting_text())
        .add(
            TSpan::new("")
                .set("x", center.x())
                .set("dy", 0)
                .add(node::Text::new(format!("{} {first}", positioned.id()))),
        );
    if let Some(rest) = rest {
        text = text.add(
            TSpan::new("")
                .set("x", center.x())
                .set("dy", 20)
                .add(node::Text::new(rest)),
        );
    }

    let mut anchor = Element::new("a");
    anchor.assign("xlink:href", positioned.url());
    anchor.assign("target", "_blank");
    anchor.append(rect);
    anchor.append(text);
    anchor
}

fn render_edge(layout: &Layout, edge: &Edge) -> Option<Line> {
    let from = layout.node(edge.from())?.bottom_anchor();
    let to = layout.node(edge.to())?.top_anchor();
    Some(line(from, to))
}

fn line(from: Point, to: Point) -> Line {
    Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", to.x())
        .set("y2", to.y())
        .set("stroke", EDGE_COLOR)
        .set("stroke-width", 2)
        .set("marker-end", format!("url(#{ARROW_ID})"))
}

/// Splits a title into the first line and, for long titles, the second.
///
/// Each line holds at most [`CAPTION_LINE_CHARS`] characters; anything
/// beyond two lines is dropped.
fn caption_lines(title: &str) -> (String, Option<String>) {
    let mut chars = title.chars();
    let first: String = chars.by_ref().take(CAPTION_LINE_CHARS).collect();
    let rest: String = chars.take(CAPTION_LINE_CHARS).collect();
    if rest.is_empty() {
        (first, None)
    } else {
        (first, Some(rest))
    }
}

/// Swatch and label for each legend entry, from top to bottom.
fn legend(width: i32, height: i32) -> Vec<(Rectangle, Text)> {
    [
        ("Epic", Color::epic(), 80),
        ("Workstream", Color::workstream(), 50),
        ("Task", Color::task(), 20),
    ]
    .into_iter()
    .map(|(label, color, offset)| {
        let swatch = Rectangle::new()
            .set("x", width - 100)
            .set("y", height - offset)
            .set("width", 20)
            .set("height", 20)
            .set("fill", &color)
            .set("stroke", OUTLINE_COLOR)
            .set("stroke-width", 1);
        let text = Text::new("")
            .set("x", width - 70)
            .set("y", height - offset + 15)
            .set("font-family", "Arial")
            .set("font-size", 12)
            .set("text-anchor", "start")
            .add(node::Text::new(label));
        (swatch, text)
    })
    .collect()
}

//! Layout of issue graphs.
//!
//! A layout engine turns an [`IssueGraph`] with a designated root into a
//! [`Layout`]: the canvas size, the positioned nodes in placement order and
//! the parent → child edges between them.
//!
//! Two styles can be selected. [`LayoutStyle::Tree`] is the top-down tree
//! layout; [`LayoutStyle::Radial`] is accepted as an alias and produces the
//! exact same tree layout.

mod tree;

pub use tree::Engine as TreeEngine;

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use issue_graph_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    identifier::IssueId,
    semantic::{IssueGraph, IssueNode},
};

use crate::error::NoRootError;

/// Padding added to the right and bottom of the furthest node.
pub const CANVAS_PADDING: i32 = 100;

/// Selectable layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Top-down tree, children before parents (default)
    #[default]
    Tree,
    /// Alias of [`LayoutStyle::Tree`]
    Radial,
}

impl FromStr for LayoutStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(Self::Tree),
            "radial" => Ok(Self::Radial),
            _ => Err("Unsupported layout style"),
        }
    }
}

impl From<LayoutStyle> for &'static str {
    fn from(val: LayoutStyle) -> Self {
        match val {
            LayoutStyle::Tree => "tree",
            LayoutStyle::Radial => "radial",
        }
    }
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Trait implemented by layout engines.
pub trait Engine {
    /// Calculate the layout starting at the graph's designated root.
    ///
    /// # Errors
    ///
    /// Returns [`NoRootError`] when the graph has no root or the root is not
    /// part of the graph.
    fn calculate(&self, graph: &IssueGraph) -> Result<Layout, NoRootError>;
}

/// Builder for creating and configuring layout engines.
#[derive(Debug, Clone, Copy)]
pub struct EngineBuilder {
    engine: TreeEngine,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with the default spacing
    pub fn new() -> Self {
        Self {
            engine: TreeEngine::new(),
        }
    }

    /// Set the horizontal distance between neighbouring leaves
    pub fn with_x_spacing(mut self, spacing: i32) -> Self {
        self.engine = self.engine.with_x_spacing(spacing);
        self
    }

    /// Set the vertical distance between levels
    pub fn with_y_spacing(mut self, spacing: i32) -> Self {
        self.engine = self.engine.with_y_spacing(spacing);
        self
    }

    /// Limit how many levels below the root are expanded
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.engine = self.engine.with_max_depth(max_depth);
        self
    }

    /// Build the engine for the given style.
    ///
    /// Both styles currently produce the tree engine.
    pub fn build(self, style: LayoutStyle) -> Box<dyn Engine> {
        match style {
            LayoutStyle::Tree | LayoutStyle::Radial => Box::new(self.engine),
        }
    }
}

/// An issue placed on the canvas. The position is the center of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedNode {
    id: IssueId,
    title: String,
    url: String,
    state: String,
    color: Color,
    position: Point,
    size: Size,
}

impl PositionedNode {
    fn new(node: &IssueNode, position: Point, size: Size) -> Self {
        Self {
            id: node.id(),
            title: node.title().to_string(),
            url: node.url().to_string(),
            state: node.state().to_string(),
            color: node.color().clone(),
            position,
            size,
        }
    }

    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Center of the node
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.size)
    }

    /// Middle of the top edge, where incoming edges end
    pub fn top_anchor(&self) -> Point {
        self.position.with_y(self.bounds().min_y())
    }

    /// Middle of the bottom edge, where outgoing edges start
    pub fn bottom_anchor(&self) -> Point {
        self.position.with_y(self.bounds().max_y())
    }
}

/// A parent → child connection between two positioned nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: IssueId,
    to: IssueId,
}

impl Edge {
    pub fn new(from: IssueId, to: IssueId) -> Self {
        Self { from, to }
    }

    /// The parent end
    pub fn from(&self) -> IssueId {
        self.from
    }

    /// The child end
    pub fn to(&self) -> IssueId {
        self.to
    }
}

/// Result of a layout calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    canvas: Size,
    nodes: IndexMap<IssueId, PositionedNode>,
    edges: Vec<Edge>,
}

impl Layout {
    /// Creates a layout and sizes the canvas to fit every node.
    fn new(nodes: IndexMap<IssueId, PositionedNode>, edges: Vec<Edge>) -> Self {
        let canvas = canvas_size(nodes.values());
        Self {
            canvas,
            nodes,
            edges,
        }
    }

    /// Canvas size: the furthest right and bottom node edges plus padding.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Positioned nodes in placement order.
    pub fn nodes(&self) -> impl Iterator<Item = &PositionedNode> {
        self.nodes.values()
    }

    /// Returns the node placed for `id`, if it was reached.
    pub fn node(&self, id: IssueId) -> Option<&PositionedNode> {
        self.nodes.get(&id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of positioned nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Both maxima start at zero, so an empty layout gets a padding-only canvas.
fn canvas_size<'a>(nodes: impl Iterator<Item = &'a PositionedNode>) -> Size {
    let extent = nodes.fold(Bounds::default(), |extent, node| {
        extent.merge(&node.bounds())
    });
    Size::new(extent.max_x(), extent.max_y()).grow(CANVAS_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positioned(id: u64, x: i32, y: i32) -> PositionedNode {
        let node = IssueNode::new(IssueId::new(id), "node");
        PositionedNode::new(&node, Point::new(x, y), Size::new(180, 70))
    }

    #[test]
    fn test_layout_style_parse() {
        assert_eq!("tree".parse::<LayoutStyle>(), Ok(LayoutStyle::Tree));
        assert_eq!("radial".parse::<LayoutStyle>(), Ok(LayoutStyle::Radial));
        assert!("force".parse::<LayoutStyle>().is_err());
        assert_eq!(LayoutStyle::Radial.to_string(), "radial");
        assert_eq!(LayoutStyle::default(), LayoutStyle::Tree);
    }

    #[test]
    fn test_empty_canvas() {
        let layout = Layout::new(IndexMap::new(), Vec::new());
        assert_eq!(layout.canvas(), Size::new(100, 100));
        assert!(layout.is_empty());
    }

    #[test]
    fn test_canvas_uses_furthest_edges() {
        let nodes: IndexMap<_, _> = [positioned(1, 200, 50), positioned(2, 400, 150)]
            .into_iter()
            .map(|node| (node.id(), node))
            .collect();
        let layout = Layout::new(nodes, Vec::new());
        assert_eq!(layout.canvas(), Size::new(590, 285));
    }

    #[test]
    fn test_canvas_ignores_negative_coordinates() {
        let nodes: IndexMap<_, _> = [positioned(1, -500, -300)]
            .into_iter()
            .map(|node| (node.id(), node))
            .collect();
        let layout = Layout::new(nodes, Vec::new());
        assert_eq!(layout.canvas(), Size::new(100, 100));
    }

    #[test]
    fn test_canvas_saturates_far_nodes() {
        let nodes: IndexMap<_, _> = [positioned(1, i32::MAX, 50)]
            .into_iter()
            .map(|node| (node.id(), node))
            .collect();
        let layout = Layout::new(nodes, Vec::new());
        assert_eq!(layout.canvas(), Size::new(i32::MAX, 185));
    }

    #[test]
    fn test_anchors() {
        let node = positioned(1, 200, 150);
        assert_eq!(node.top_anchor(), Point::new(200, 115));
        assert_eq!(node.bottom_anchor(), Point::new(200, 185));
    }
}

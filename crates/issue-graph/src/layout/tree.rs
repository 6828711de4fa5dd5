//! Top-down tree layout.
//!
//! Nodes are placed depth first, children before their parent. Leaves are
//! laid out left to right, one `x_spacing` apart, and every parent is
//! centered over its first and last child. Each level sits `y_spacing`
//! below the previous one.
//!
//! The graph may contain cycles and shared children. A node is marked as
//! visited when the walk enters it and is placed at most once; reaching a
//! visited node again leaves the cursor where it was.
//!
//! Cursor and level offsets saturate at the `i32` range, so extreme spacing
//! values clamp positions instead of overflowing.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};

use issue_graph_core::{
    geometry::{Point, Size},
    identifier::IssueId,
    semantic::{IssueGraph, IssueNode},
};

use crate::{
    error::NoRootError,
    layout::{self, Edge, Layout, PositionedNode},
};

/// Vertical offset of the first level.
const TOP_OFFSET: i32 = 50;

/// Tree layout engine.
///
/// # Examples
///
/// ```
/// use issue_graph::layout::{Engine as _, TreeEngine};
/// use issue_graph_core::{identifier::IssueId, semantic::{IssueGraph, IssueNode}};
///
/// let mut graph = IssueGraph::new();
/// for id in 1..=3 {
///     graph.insert(IssueNode::new(IssueId::new(id), "issue"));
/// }
/// graph.link(IssueId::new(1), IssueId::new(2)).unwrap();
/// graph.link(IssueId::new(1), IssueId::new(3)).unwrap();
/// graph.set_root(IssueId::new(1)).unwrap();
///
/// let layout = TreeEngine::new().calculate(&graph).unwrap();
/// let root = layout.node(IssueId::new(1)).unwrap();
/// assert_eq!((root.position().x(), root.position().y()), (100, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    x_spacing: i32,
    y_spacing: i32,
    origin: Point,
    node_size: Size,
    max_depth: Option<usize>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new tree engine with the default configuration
    pub fn new() -> Self {
        Self {
            x_spacing: 200,
            y_spacing: 100,
            origin: Point::default(),
            node_size: Size::new(180, 70),
            max_depth: None,
        }
    }

    /// Set the horizontal distance between neighbouring leaves
    pub fn with_x_spacing(mut self, spacing: i32) -> Self {
        self.x_spacing = spacing;
        self
    }

    /// Set the vertical distance between levels
    pub fn with_y_spacing(mut self, spacing: i32) -> Self {
        self.y_spacing = spacing;
        self
    }

    /// Set where the first leaf and the root level are placed
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the depth ceiling.
    ///
    /// A node at `max_depth` levels below the root is placed as a leaf and
    /// its children are not visited. `None` expands the whole graph.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl layout::Engine for Engine {
    fn calculate(&self, graph: &IssueGraph) -> Result<Layout, NoRootError> {
        let root = graph.root().ok_or(NoRootError::Missing)?;
        if !graph.contains(root) {
            return Err(NoRootError::IssueNotFound(root));
        }

        let mut walk = Walk {
            engine: self,
            graph,
            visited: HashSet::new(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        };
        walk.place(root, 0, self.origin.x());

        debug!(
            nodes_count = walk.nodes.len(),
            edges_count = walk.edges.len();
            "Tree layout calculated"
        );
        Ok(Layout::new(walk.nodes, walk.edges))
    }
}

/// State of a single layout calculation.
struct Walk<'a> {
    engine: &'a Engine,
    graph: &'a IssueGraph,
    visited: HashSet<IssueId>,
    nodes: IndexMap<IssueId, PositionedNode>,
    edges: Vec<Edge>,
}

impl Walk<'_> {
    /// Places the subtree below `id` starting at `cursor` and returns the
    /// cursor for the next sibling.
    fn place(&mut self, id: IssueId, level: usize, cursor: i32) -> i32 {
        if !self.visited.insert(id) {
            return cursor;
        }
        let graph = self.graph;
        let Some(node) = graph.node(id) else {
            return cursor;
        };

        let x_spacing = self.engine.x_spacing;
        let y = self.level_y(level);
        let at_ceiling = self.engine.max_depth.is_some_and(|max| level >= max);

        if node.children().is_empty() || at_ceiling {
            trace!(issue = id.number(), x = cursor, y; "Placing leaf");
            self.record(node, Point::new(cursor, y));
            return cursor.saturating_add(x_spacing);
        }

        let mut next = cursor;
        for &child in node.children() {
            next = self.place(child, level + 1, next);
        }

        let Some(x) = self.center_over_children(node) else {
            // Every child is an ancestor still being placed.
            trace!(issue = id.number(), x = cursor, y; "Placing node with only back-edges");
            self.record(node, Point::new(cursor, y));
            self.connect(node);
            return cursor.saturating_add(x_spacing);
        };

        self.record(node, Point::new(x, y));
        self.connect(node);
        next
    }

    /// Midpoint between the first and last child that already has a position.
    fn center_over_children(&self, node: &IssueNode) -> Option<i32> {
        let mut placed = node
            .children()
            .iter()
            .filter_map(|child| self.nodes.get(child))
            .map(PositionedNode::position);
        let first = placed.next()?;
        let last = placed.last().unwrap_or(first);
        Some(first.midpoint(last).x())
    }

    fn level_y(&self, level: usize) -> i32 {
        let level = i32::try_from(level).unwrap_or(i32::MAX);
        self.engine
            .origin
            .y()
            .saturating_add(level.saturating_mul(self.engine.y_spacing))
            .saturating_add(TOP_OFFSET)
    }

    fn record(&mut self, node: &IssueNode, position: Point) {
        let positioned = PositionedNode::new(node, position, self.engine.node_size);
        self.nodes.insert(node.id(), positioned);
    }

    fn connect(&mut self, node: &IssueNode) {
        let graph = self.graph;
        self.edges.extend(
            node.children()
                .iter()
                .filter(|&&child| graph.contains(child))
                .map(|&child| Edge::new(node.id(), child)),
        );
    }
}


#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::layout::Engine as _;

    /// Graphs of `1..=n` issues with arbitrary links, rooted at `1`.
    fn graph_strategy(acyclic: bool) -> impl Strategy<Value = IssueGraph> {
        (1u64..24).prop_flat_map(move |count| {
            let links = prop::collection::vec((1..=count, 1..=count), 0..48);
            links.prop_map(move |links| {
                let mut graph = IssueGraph::new();
                for id in 1..=count {
                    graph.insert(IssueNode::new(IssueId::new(id), format!("Issue {id}")));
                }
                for (a, b) in links {
                    let (parent, child) = if acyclic { (a.min(b), a.max(b)) } else { (a, b) };
                    let _ = graph.link(IssueId::new(parent), IssueId::new(child));
                }
                let _ = graph.set_root(IssueId::new(1));
                graph
            })
        })
    }

    fn reachable(graph: &IssueGraph, root: IssueId) -> HashSet<IssueId> {
        let mut seen = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(graph.node(id).into_iter().flat_map(|n| n.children().iter().copied()));
            }
        }
        seen
    }

    /// Every reachable node is placed exactly once and nothing else is.
    fn check_reachable_nodes_placed_once(graph: &IssueGraph) -> Result<(), TestCaseError> {
        let layout = Engine::new()
            .calculate(graph)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let placed: Vec<IssueId> = layout.nodes().map(PositionedNode::id).collect();
        let unique: HashSet<IssueId> = placed.iter().copied().collect();
        prop_assert_eq!(placed.len(), unique.len());
        prop_assert_eq!(unique, reachable(graph, IssueId::new(1)));
        Ok(())
    }

    /// Both ends of every edge are positioned and the canvas covers all nodes.
    fn check_edges_and_canvas(graph: &IssueGraph) -> Result<(), TestCaseError> {
        let layout = Engine::new()
            .calculate(graph)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        for edge in layout.edges() {
            prop_assert!(layout.node(edge.from()).is_some());
            prop_assert!(layout.node(edge.to()).is_some());
        }
        for node in layout.nodes() {
            prop_assert!(node.bounds().max_x() + 100 <= layout.canvas().width());
            prop_assert!(node.bounds().max_y() + 100 <= layout.canvas().height());
            prop_assert_eq!((node.position().y() - 50) % 100, 0);
        }

        let again = Engine::new()
            .calculate(graph)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(layout, again);
        Ok(())
    }

    proptest! {
        #[test]
        fn acyclic_nodes_placed_once(graph in graph_strategy(true)) {
            check_reachable_nodes_placed_once(&graph)?;
        }

        #[test]
        fn cyclic_nodes_placed_once(graph in graph_strategy(false)) {
            check_reachable_nodes_placed_once(&graph)?;
        }

        #[test]
        fn edges_and_canvas_consistent(graph in graph_strategy(false)) {
            check_edges_and_canvas(&graph)?;
        }
    }
}

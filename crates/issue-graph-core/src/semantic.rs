//! Semantic issue model types.
//!
//! This module holds the records fetched from an issue tracker and the arena
//! the graph builder assembles from them.
//!
//! # Pipeline Position
//!
//! ```text
//! Issue source (GitHub REST / JSON file)
//!     ↓ fetch
//! Issues (Issue, Label)
//!     ↓ structure
//! Issue arena (IssueGraph, IssueNode)
//!     ↓ layout
//! Positioned nodes and edges
//!     ↓ export
//! SVG
//! ```
//!
//! # Organization
//!
//! - [`Issue`] and [`Label`] mirror the fields of the GitHub issues API that
//!   the graph uses. Unknown fields are ignored on deserialization.
//! - [`IssueGraph`] owns every [`IssueNode`] keyed by [`IssueId`]. Nodes refer
//!   to each other by id, so the graph may contain cycles.

use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};
use thiserror::Error;

use crate::{color::Color, identifier::IssueId};

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    name: String,
    #[serde(default)]
    color: String,
}

impl Label {
    /// Creates a label from its name and hex color (without `#`).
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Returns the label name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw hex color as reported by the tracker.
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// An issue as returned by the issues list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    number: IssueId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    pull_request: Option<IgnoredAny>,
}

impl Issue {
    /// Creates an open issue with no labels and no body.
    ///
    /// # Examples
    ///
    /// ```
    /// use issue_graph_core::{identifier::IssueId, semantic::{Issue, Label}};
    ///
    /// let issue = Issue::new(IssueId::new(3), "Ship it")
    ///     .with_body("Parent issue: #1")
    ///     .with_label(Label::new("epic", "6f42c1"));
    ///
    /// assert_eq!(issue.number(), IssueId::new(3));
    /// assert_eq!(issue.body(), Some("Parent issue: #1"));
    /// assert_eq!(issue.labels().len(), 1);
    /// ```
    pub fn new(number: IssueId, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            html_url: String::new(),
            state: "open".to_string(),
            labels: Vec::new(),
            body: None,
            pull_request: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = url.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Marks this record as a pull request.
    pub fn with_pull_request(mut self) -> Self {
        self.pull_request = Some(IgnoredAny);
        self
    }

    pub fn number(&self) -> IssueId {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.html_url
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the issue body, if the issue has one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The issues endpoint also lists pull requests; those carry a
    /// `pull_request` object.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// One vertex of the issue graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueNode {
    id: IssueId,
    title: String,
    url: String,
    state: String,
    color: Color,
    parents: Vec<IssueId>,
    children: Vec<IssueId>,
}

impl IssueNode {
    /// Creates a node without links, using the default task color.
    pub fn new(id: IssueId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: String::new(),
            state: String::new(),
            color: Color::default(),
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
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

    /// Issues this one belongs to, in link order.
    pub fn parents(&self) -> &[IssueId] {
        &self.parents
    }

    /// Issues below this one, in link order.
    pub fn children(&self) -> &[IssueId] {
        &self.children
    }
}

/// Errors raised when editing an [`IssueGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("issue {0} is not part of the graph")]
    UnknownIssue(IssueId),

    #[error("issue {0} cannot be linked to itself")]
    SelfLink(IssueId),
}

/// Arena of issue nodes with an optional designated root.
///
/// Nodes keep their insertion order, which is the order issues were fetched
/// in. Links are stored on both ends: the parent lists the child in
/// `children` and the child lists the parent in `parents`.
///
/// # Examples
///
/// ```
/// use issue_graph_core::{identifier::IssueId, semantic::{IssueGraph, IssueNode}};
///
/// let mut graph = IssueGraph::new();
/// graph.insert(IssueNode::new(IssueId::new(1), "Epic"));
/// graph.insert(IssueNode::new(IssueId::new(2), "Task"));
///
/// assert_eq!(graph.link(IssueId::new(1), IssueId::new(2)), Ok(true));
/// // Linking twice is a no-op
/// assert_eq!(graph.link(IssueId::new(1), IssueId::new(2)), Ok(false));
///
/// let top: Vec<_> = graph.top_level().collect();
/// assert_eq!(top, vec![IssueId::new(1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IssueGraph {
    nodes: IndexMap<IssueId, IssueNode>,
    root: Option<IssueId>,
}

impl IssueGraph {
    /// Creates an empty graph without a root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, replacing and returning any node with the same id.
    ///
    /// A replaced node keeps its position in the insertion order.
    pub fn insert(&mut self, node: IssueNode) -> Option<IssueNode> {
        self.nodes.insert(node.id, node)
    }

    /// Returns the node with the given id, if present.
    pub fn node(&self, id: IssueId) -> Option<&IssueNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: IssueId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &IssueNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the designated root, if one was set.
    pub fn root(&self) -> Option<IssueId> {
        self.root
    }

    /// Designates the root the layout starts from.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIssue`] if no node has the given id.
    pub fn set_root(&mut self, id: IssueId) -> Result<(), GraphError> {
        if !self.contains(id) {
            return Err(GraphError::UnknownIssue(id));
        }
        self.root = Some(id);
        Ok(())
    }

    /// Links `parent → child`.
    ///
    /// Returns `Ok(false)` when the link already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLink`] when both ends are the same issue and
    /// [`GraphError::UnknownIssue`] when either end is missing.
    pub fn link(&mut self, parent: IssueId, child: IssueId) -> Result<bool, GraphError> {
        if parent == child {
            return Err(GraphError::SelfLink(parent));
        }
        for id in [parent, child] {
            if !self.contains(id) {
                return Err(GraphError::UnknownIssue(id));
            }
        }

        let parent_node = self
            .nodes
            .get_mut(&parent)
            .ok_or(GraphError::UnknownIssue(parent))?;
        if parent_node.children.contains(&child) {
            return Ok(false);
        }
        parent_node.children.push(child);

        let child_node = self
            .nodes
            .get_mut(&child)
            .ok_or(GraphError::UnknownIssue(child))?;
        child_node.parents.push(parent);

        Ok(true)
    }

    /// Returns the ids of nodes without parents, in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = IssueId> {
        self.nodes
            .values()
            .filter(|node| node.parents.is_empty())
            .map(|node| node.id)
    }
}

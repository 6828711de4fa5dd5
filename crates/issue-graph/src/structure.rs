//! Assembly of the issue arena from fetched issues.
//!
//! The builder turns a flat list of [`Issue`]s into an [`IssueGraph`]:
//! every issue becomes a node, body references become parent/child links
//! and the root the layout starts from is resolved.

use std::str::FromStr;

use log::{debug, trace, warn};

use issue_graph_core::{
    color::Color,
    identifier::IssueId,
    semantic::{Issue, IssueGraph, IssueNode, Label},
};

use crate::{
    error::NoRootError,
    references::{find_child_references, find_parent_references},
};

/// Title of the synthetic root created for [`RootSelection::All`].
pub const ALL_ISSUES_TITLE: &str = "All Issues";

/// Where the layout starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootSelection {
    /// Start at a single issue.
    Issue(IssueId),
    /// Start at a synthetic root whose children are all top-level issues.
    #[default]
    All,
}

impl From<u64> for RootSelection {
    /// `0` selects all issues, any other number a single issue.
    fn from(number: u64) -> Self {
        if number == 0 {
            Self::All
        } else {
            Self::Issue(IssueId::new(number))
        }
    }
}

impl FromStr for RootSelection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#') {
            "all" => Ok(Self::All),
            number => number
                .parse::<u64>()
                .map(Self::from)
                .map_err(|_| "Root must be an issue number or `all`"),
        }
    }
}

/// Picks the fill color of an issue from its labels.
///
/// The first label whose name contains `epic` or `workstream`, ignoring
/// case, lends its color. Everything else is drawn in the task gray, as is
/// a label whose color does not parse.
///
/// # Examples
///
/// ```
/// use issue_graph::structure::node_color;
/// use issue_graph_core::semantic::Label;
///
/// let labels = [Label::new("bug", "d73a4a"), Label::new("Epic", "6f42c1")];
/// assert_eq!(node_color(&labels).to_string(), "#6f42c1");
/// assert_eq!(node_color(&[]).to_string(), "#cccccc");
/// ```
pub fn node_color(labels: &[Label]) -> Color {
    let Some(label) = labels.iter().find(|label| {
        let name = label.name().to_lowercase();
        name.contains("epic") || name.contains("workstream")
    }) else {
        return Color::default();
    };

    Color::from_label_hex(label.color()).unwrap_or_else(|err| {
        warn!(label = label.name(), err:%; "Ignoring label color");
        Color::default()
    })
}

/// Builds the issue arena and resolves its root.
///
/// Pull requests are expected to be filtered out by the caller.
///
/// # Errors
///
/// Returns [`NoRootError::IssueNotFound`] when the selected issue was not
/// fetched and [`NoRootError::NoTopLevelIssues`] when every issue has a
/// parent (or there are no issues) and all issues were requested.
pub fn build_graph(issues: &[Issue], selection: RootSelection) -> Result<IssueGraph, NoRootError> {
    let mut graph = IssueGraph::new();

    for issue in issues {
        let node = IssueNode::new(issue.number(), issue.title())
            .with_url(issue.url())
            .with_state(issue.state())
            .with_color(node_color(issue.labels()));
        if graph.insert(node).is_some() {
            warn!(issue = issue.number().number(); "Duplicate issue replaced");
        }
    }
    debug!(nodes_count = graph.len(); "Issue nodes created");

    let mut links = 0usize;
    for issue in issues {
        let Some(body) = issue.body() else {
            continue;
        };
        let id = issue.number();

        let parents = find_parent_references(body).into_iter().map(|parent| (parent, id));
        let children = find_child_references(body).into_iter().map(|child| (id, child));
        for (parent, child) in parents.chain(children) {
            match graph.link(parent, child) {
                Ok(true) => links += 1,
                Ok(false) => {}
                Err(err) => {
                    trace!(parent = parent.number(), child = child.number(), err:%; "Skipping reference");
                }
            }
        }
    }
    debug!(links_count = links; "Issue references linked");

    resolve_root(&mut graph, selection)?;
    Ok(graph)
}

fn resolve_root(graph: &mut IssueGraph, selection: RootSelection) -> Result<(), NoRootError> {
    match selection {
        RootSelection::Issue(id) => graph
            .set_root(id)
            .map_err(|_| NoRootError::IssueNotFound(id)),
        RootSelection::All => {
            let top_level: Vec<IssueId> = graph.top_level().collect();
            if top_level.is_empty() {
                return Err(NoRootError::NoTopLevelIssues);
            }
            debug!(top_level_count = top_level.len(); "Creating synthetic root");

            let root = IssueId::ALL_ISSUES;
            graph.insert(IssueNode::new(root, ALL_ISSUES_TITLE).with_color(Color::root()));
            for child in top_level {
                graph
                    .link(root, child)
                    .map_err(|_| NoRootError::IssueNotFound(child))?;
            }
            graph
                .set_root(root)
                .map_err(|_| NoRootError::IssueNotFound(root))
        }
    }
}

//! Issue Graph - GitHub issue relationships as a tree diagram.
//!
//! Reference extraction, graph assembly, tree layout and SVG rendering for
//! issue graphs. Issues are linked through markers in their bodies such as
//! `Parent issue: #12` or `Sub-task: #7`.

pub mod config;
pub mod layout;
pub mod references;
pub mod structure;

mod error;
mod export;

pub use issue_graph_core::{color, geometry, identifier, semantic};

pub use error::{IssueGraphError, NoRootError};
pub use structure::RootSelection;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::{Engine as _, EngineBuilder, Layout};
use semantic::{Issue, IssueGraph};

/// Builder for assembling, laying out and rendering issue graphs.
///
/// # Examples
///
/// ```rust
/// use issue_graph::{DiagramBuilder, RootSelection, config::AppConfig};
/// use issue_graph::{identifier::IssueId, semantic::Issue};
///
/// let issues = vec![
///     Issue::new(IssueId::new(1), "Epic"),
///     Issue::new(IssueId::new(2), "Task").with_body("Parent issue: #1"),
/// ];
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let graph = builder
///     .build_graph(&issues, RootSelection::All)
///     .expect("Failed to build graph");
///
/// let svg = builder.render_svg(&graph).expect("Failed to render");
/// assert!(svg.contains("#2 Task"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
    max_depth: Option<usize>,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            max_depth: None,
        }
    }

    /// Limit how many levels below the root are laid out.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Assemble the issue graph and resolve its root.
    ///
    /// # Errors
    ///
    /// Returns `IssueGraphError::NoRoot` when the selected root issue is not
    /// among `issues`, or when all issues are selected and none of them is
    /// top-level.
    pub fn build_graph(
        &self,
        issues: &[Issue],
        selection: RootSelection,
    ) -> Result<IssueGraph, IssueGraphError> {
        info!(issues_count = issues.len(), selection:?; "Building issue graph");

        let graph = structure::build_graph(issues, selection)?;

        debug!(nodes_count = graph.len(); "Issue graph built");
        trace!(graph:?; "Built graph");
        Ok(graph)
    }

    /// Calculate the layout of a graph with the configured style.
    ///
    /// # Errors
    ///
    /// Returns `IssueGraphError::NoRoot` when the graph has no usable root.
    pub fn layout(&self, graph: &IssueGraph) -> Result<Layout, IssueGraphError> {
        let layout_config = self.config.layout();
        info!(style:% = layout_config.style(); "Calculating layout");

        let engine = EngineBuilder::new()
            .with_x_spacing(layout_config.x_spacing())
            .with_y_spacing(layout_config.y_spacing())
            .with_max_depth(self.max_depth)
            .build(layout_config.style());

        let layout = engine.calculate(graph)?;
        info!(
            nodes_count = layout.len(),
            edges_count = layout.edges().len();
            "Layout calculated"
        );
        Ok(layout)
    }

    /// Lay out a graph and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `IssueGraphError` for layout or rendering errors.
    pub fn render_svg(&self, graph: &IssueGraph) -> Result<String, IssueGraphError> {
        let layout = self.layout(graph)?;

        let mut buffer = Vec::new();
        export::svg::Svg::new().export_layout(&layout, &mut buffer)?;
        let svg = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(err.to_string()))?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}

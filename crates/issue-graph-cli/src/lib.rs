//! Issue graph CLI library
//!
//! This module contains the core CLI logic for the issue graph tool.

pub mod error_adapter;
pub mod source;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};

use issue_graph::{DiagramBuilder, IssueGraphError, RootSelection};

use source::{FileSource, GithubSource, IssueSource, RepoRef};

/// Run the issue graph CLI application
///
/// This fetches the issues, builds and lays out the graph and writes the
/// resulting SVG to the output file, or to stdout when no file is given.
///
/// # Errors
///
/// Returns `IssueGraphError` for:
/// - Configuration loading errors
/// - Issue source errors (invalid repository, HTTP, decoding)
/// - Missing root issue
/// - Rendering and I/O errors
pub fn run(args: &Args) -> Result<(), IssueGraphError> {
    info!(
        repo:? = args.repo,
        issue = args.issue,
        depth = args.depth;
        "Generating issue graph"
    );

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(style) = args.layout {
        debug!(style:%; "Layout style overridden on the command line");
        app_config = app_config.with_layout_style(style);
    }

    // Fetch issues
    let selection = RootSelection::from(args.issue);
    let source = issue_source(args, app_config.github().api_url())?;
    let issues = source::fetch_for(source.as_ref(), selection)?;
    info!(issues_count = issues.len(); "Issues fetched");

    // Build, lay out and render the graph
    let builder = DiagramBuilder::new(app_config).with_max_depth(Some(args.depth));
    let graph = builder.build_graph(&issues, selection)?;
    let svg = builder.render_svg(&graph)?;

    match &args.output {
        Some(path) => {
            fs::write(path, svg)?;
            info!(output_file = path; "SVG graph written to {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Picks the issue source: a local file wins over the GitHub API.
fn issue_source(args: &Args, api_url: &str) -> Result<Box<dyn IssueSource>, IssueGraphError> {
    if let Some(path) = &args.issues_file {
        return Ok(Box::new(FileSource::new(path)));
    }

    let Some(repo) = &args.repo else {
        return Err(IssueGraphError::Config(
            "either --repo or --issues-file is required".to_string(),
        ));
    };
    let repo = RepoRef::parse(repo)?;
    Ok(Box::new(GithubSource::new(api_url, repo)?))
}

//! Command-line argument definitions for the issue graph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the repository and root issue, the
//! output path, configuration file selection and logging verbosity.

use clap::Parser;

use issue_graph::layout::LayoutStyle;

/// Command-line arguments for the issue graph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// GitHub repository in owner/repo format
    #[arg(long, required_unless_present = "issues_file")]
    pub repo: Option<String>,

    /// Root issue number (0 for all issues)
    #[arg(long, default_value_t = 0)]
    pub issue: u64,

    /// Maximum number of levels laid out below the root
    #[arg(long, default_value_t = 10)]
    pub depth: usize,

    /// Path to the output SVG file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Layout style (tree, radial), overrides the configuration file
    #[arg(long)]
    pub layout: Option<LayoutStyle>,

    /// Read issues from a JSON file instead of the GitHub API
    #[arg(long)]
    pub issues_file: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["issue-graph", "--repo", "owner/repo"]).unwrap();
        assert_eq!(args.repo.as_deref(), Some("owner/repo"));
        assert_eq!(args.issue, 0);
        assert_eq!(args.depth, 10);
        assert_eq!(args.output, None);
        assert_eq!(args.layout, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_repo_or_issues_file_required() {
        assert!(Args::try_parse_from(["issue-graph"]).is_err());
        assert!(Args::try_parse_from(["issue-graph", "--issues-file", "issues.json"]).is_ok());
    }

    #[test]
    fn test_layout_style() {
        let args =
            Args::try_parse_from(["issue-graph", "--repo", "o/r", "--layout", "radial"]).unwrap();
        assert_eq!(args.layout, Some(LayoutStyle::Radial));
        assert!(
            Args::try_parse_from(["issue-graph", "--repo", "o/r", "--layout", "force"]).is_err()
        );
    }
}

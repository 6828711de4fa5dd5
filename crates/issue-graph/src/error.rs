//! Error types for issue graph operations.
//!
//! This module provides the main error type [`IssueGraphError`] which wraps
//! the error conditions that can occur while building, laying out and
//! rendering an issue graph.

use std::io;

use thiserror::Error;

use issue_graph_core::identifier::IssueId;

/// Raised when the layout has no root to start from.
///
/// This is the only layout failure. It is fatal and nothing is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoRootError {
    #[error("graph has no designated root")]
    Missing,

    #[error("root issue {0} is not part of the graph")]
    IssueNotFound(IssueId),

    #[error("no top-level issues found")]
    NoTopLevelIssues,
}

/// The main error type for issue graph operations.
#[derive(Debug, Error)]
pub enum IssueGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    NoRoot(#[from] NoRootError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Issue source error: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for IssueGraphError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl IssueGraphError {
    /// Wrap an error raised while fetching issues.
    pub fn source_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }
}

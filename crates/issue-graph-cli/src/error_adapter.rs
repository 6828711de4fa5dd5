//! Error adapter for converting IssueGraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use issue_graph::{IssueGraphError, NoRootError};

use crate::source::SourceError;

/// Adapter giving an [`IssueGraphError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a IssueGraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            IssueGraphError::Io(_) => "issue_graph::io",
            IssueGraphError::NoRoot(_) => "issue_graph::no_root",
            IssueGraphError::Config(_) => "issue_graph::config",
            IssueGraphError::Export(_) => "issue_graph::export",
            IssueGraphError::Source(_) => "issue_graph::source",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            IssueGraphError::NoRoot(NoRootError::NoTopLevelIssues) => {
                "every issue has a parent; pick a root with --issue <N>"
            }
            IssueGraphError::NoRoot(NoRootError::IssueNotFound(_)) => {
                "check the issue number; pull requests cannot be used as the root"
            }
            IssueGraphError::Source(err) => match err.downcast_ref::<SourceError>()? {
                SourceError::InvalidRepo(_) => "pass the repository as --repo owner/repo",
                SourceError::Status { status: 403 | 429, .. } => {
                    "unauthenticated requests are rate limited; try again later or use --issues-file"
                }
                SourceError::Status { status: 404, .. } => {
                    "check that the repository exists and is public"
                }
                _ => return None,
            },
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use issue_graph::identifier::IssueId;

    use super::*;

    fn code(err: &IssueGraphError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    fn help(err: &IssueGraphError) -> Option<String> {
        ErrorAdapter(err).help().map(|help| help.to_string())
    }

    #[test]
    fn test_codes() {
        let err = IssueGraphError::NoRoot(NoRootError::IssueNotFound(IssueId::new(9)));
        assert_eq!(code(&err).as_deref(), Some("issue_graph::no_root"));
        assert_eq!(ErrorAdapter(&err).to_string(), "root issue #9 is not part of the graph");

        let err = IssueGraphError::Config("bad".to_string());
        assert_eq!(code(&err).as_deref(), Some("issue_graph::config"));
        assert_eq!(help(&err), None);
    }

    #[test]
    fn test_source_help() {
        let err = IssueGraphError::from(SourceError::InvalidRepo("nope".to_string()));
        assert_eq!(code(&err).as_deref(), Some("issue_graph::source"));
        assert!(help(&err).unwrap().contains("owner/repo"));

        let err = IssueGraphError::from(SourceError::Status {
            status: 500,
            url: "https://api.github.com".to_string(),
        });
        assert_eq!(help(&err), None);
    }

    #[test]
    fn test_render_report() {
        let err = IssueGraphError::NoRoot(NoRootError::NoTopLevelIssues);
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();
        assert!(out.contains("no top-level issues found"));
        assert!(out.contains("--issue"));
    }
}

//! Error adapter for converting CheckError to miette diagnostics.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use crate::error::CheckError;

/// Adapter giving a [`CheckError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CheckError);

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
            CheckError::InvalidConfig(_) => "repo_check::invalid_config",
            CheckError::Path { .. } => "repo_check::path",
            CheckError::FileAccess { .. } => "repo_check::file_access",
            CheckError::Io(_) => "repo_check::io",
            CheckError::Report(_) => "repo_check::report",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CheckError::Path { .. } | CheckError::FileAccess { .. } => {
                "pass an existing repository directory with --path <dir>"
            }
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

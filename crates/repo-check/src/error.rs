use std::{io, path::PathBuf};

use thiserror::Error;

use crate::exit_code::ExitCode;

/// Errors that stop a repository check from completing.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Path error for {}: {reason}", path.display())]
    Path { path: PathBuf, reason: String },

    #[error("File access error for {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CheckError {
    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CheckError::InvalidConfig(_) => ExitCode::InvalidConfig,
            CheckError::Path { .. } => ExitCode::PathError,
            CheckError::FileAccess { .. } => ExitCode::FileAccessError,
            CheckError::Io(_) | CheckError::Report(_) => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CheckError::InvalidConfig("x".to_string()).exit_code(),
            ExitCode::InvalidConfig
        );
        assert_eq!(
            CheckError::Path {
                path: PathBuf::from("a"),
                reason: "path is not a directory".to_string(),
            }
            .exit_code(),
            ExitCode::PathError
        );
        assert_eq!(
            CheckError::FileAccess {
                path: PathBuf::from("a"),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .exit_code(),
            ExitCode::FileAccessError
        );
        assert_eq!(
            CheckError::Io(io::Error::other("boom")).exit_code(),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_display() {
        let err = CheckError::Path {
            path: PathBuf::from("/tmp/repo"),
            reason: "path is not a directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Path error for /tmp/repo: path is not a directory"
        );
    }
}

//! File presence checks.

use std::{fs, io, path::Path};

use log::{debug, warn};

use crate::catalog::FileRequirement;

/// Outcome of checking a single [`FileRequirement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    requirement: FileRequirement,
    exists: bool,
    error: Option<String>,
}

impl CheckResult {
    pub fn present(requirement: FileRequirement) -> Self {
        Self {
            requirement,
            exists: true,
            error: None,
        }
    }

    pub fn missing(requirement: FileRequirement) -> Self {
        Self {
            requirement,
            exists: false,
            error: None,
        }
    }

    /// The file could not be checked.
    pub fn failed(requirement: FileRequirement, error: impl Into<String>) -> Self {
        Self {
            requirement,
            exists: false,
            error: Some(error.into()),
        }
    }

    pub fn requirement(&self) -> &FileRequirement {
        &self.requirement
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Checks a single requirement against the repository at `repo`.
///
/// Only a [`io::ErrorKind::NotFound`] counts as missing; any other error
/// from the file system is recorded on the result.
pub fn check_file(repo: &Path, requirement: FileRequirement) -> CheckResult {
    let path = repo.join(requirement.path());

    match fs::metadata(&path) {
        Ok(_) => CheckResult::present(requirement),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(
                file = requirement.path(),
                priority:% = requirement.priority(),
                category:% = requirement.category();
                "File is missing"
            );
            CheckResult::missing(requirement)
        }
        Err(err) => {
            warn!(file = requirement.path(), err:err; "Failed to check file");
            CheckResult::failed(
                requirement,
                format!("error checking file {}: {err}", requirement.path()),
            )
        }
    }
}

/// Checks every requirement, preserving their order.
pub fn check_repository(repo: &Path, requirements: &[FileRequirement]) -> Vec<CheckResult> {
    requirements
        .iter()
        .map(|requirement| check_file(repo, *requirement))
        .collect()
}

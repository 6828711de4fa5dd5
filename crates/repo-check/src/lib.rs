//! Repository file checker
//!
//! Checks that a repository contains the files most projects are expected
//! to carry (README, license, security policy and the like) plus the files
//! of optional tool groups such as Docker or TypeScript.
//!
//! # Example
//!
//! ```rust
//! use repo_check::{
//!     catalog::{FileGroups, requirements},
//!     checker::check_repository,
//!     report::Summary,
//! };
//!
//! let dir = std::env::temp_dir();
//! let results = check_repository(&dir, &requirements(&FileGroups::none()));
//! let summary = Summary::from_results(&results);
//! println!("{}", summary.summary_line());
//! ```

pub mod catalog;
pub mod checker;
pub mod error_adapter;
pub mod exit_code;
pub mod prompt;
pub mod report;

mod args;
mod error;

pub use args::Args;
pub use error::CheckError;
pub use error_adapter::ErrorAdapter;
pub use exit_code::ExitCode;

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use catalog::{Category, FileGroups, Priority};
use report::Summary;

/// Validated options of a repository check.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    repo_path: PathBuf,
    json: bool,
    interactive: bool,
    groups: FileGroups,
}

impl CheckConfig {
    /// Validates the arguments and resolves the repository path.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidConfig`] for conflicting options,
    /// [`CheckError::FileAccess`] when the path cannot be accessed and
    /// [`CheckError::Path`] when it is not a directory.
    pub fn from_args(args: &Args) -> Result<Self, CheckError> {
        if args.path.is_empty() {
            return Err(CheckError::InvalidConfig(
                "repository path cannot be empty".to_string(),
            ));
        }
        if args.json && args.interactive {
            return Err(CheckError::InvalidConfig(
                "--json and --interactive cannot be used together".to_string(),
            ));
        }

        Ok(Self {
            repo_path: resolve_repo_path(Path::new(&args.path))?,
            json: args.json,
            interactive: args.interactive,
            groups: args.file_groups(),
        })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    pub fn groups(&self) -> &FileGroups {
        &self.groups
    }
}

/// Canonicalizes `path` and makes sure it is a directory.
fn resolve_repo_path(path: &Path) -> Result<PathBuf, CheckError> {
    let metadata = fs::metadata(path).map_err(|source| CheckError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(CheckError::Path {
            path: path.to_path_buf(),
            reason: "path is not a directory".to_string(),
        });
    }

    fs::canonicalize(path).map_err(|err| CheckError::Path {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Run the repository check
///
/// The interactive prompt reads from `input`; the prompt and the report are
/// written to `output`.
///
/// Returns the exit code describing the outcome: missing must-have files and
/// files that could not be checked are not errors of the run itself.
///
/// # Errors
///
/// Returns `CheckError` for:
/// - Invalid or conflicting options
/// - A repository path that cannot be accessed or is not a directory
/// - Invalid interactive input
/// - Failures writing the report
pub fn run(
    args: &Args,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<ExitCode, CheckError> {
    let mut config = CheckConfig::from_args(args)?;
    info!(repo_path:? = config.repo_path; "Checking repository");

    if config.interactive && config.groups.is_empty() {
        config.groups = prompt::prompt_file_groups(input, output)?;
    }
    debug!(groups:? = config.groups; "File groups enabled");

    let requirements = catalog::requirements(&config.groups);
    debug!(
        must_have = catalog::filter_by_priority(&requirements, Priority::MustHave).len(),
        should_have = catalog::filter_by_priority(&requirements, Priority::ShouldHave).len(),
        public = catalog::filter_by_category(&requirements, Category::Public).len();
        "Checking {} files",
        requirements.len()
    );
    let results = checker::check_repository(&config.repo_path, &requirements);
    let summary = Summary::from_results(&results);

    if config.json {
        summary.write_json(output)?;
    } else {
        summary.write_console(output)?;
    }
    output.flush()?;

    let exit_code = summary.exit_code();
    if summary.is_success() {
        info!(exit_code:%; "{}", summary.summary_line());
    } else {
        warn!(exit_code:%; "Repository validation failed: {}", summary.summary_line());
    }

    Ok(exit_code)
}

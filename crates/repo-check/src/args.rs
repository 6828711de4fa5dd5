//! Command-line argument definitions for the repo-check CLI.

use clap::Parser;

use crate::catalog::{FileGroup, FileGroups};

/// Command-line arguments for the repository file checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the repository
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Prompt for the file groups to check
    #[arg(long)]
    pub interactive: bool,

    /// Check Augment AI related files
    #[arg(long)]
    pub augment: bool,

    /// Check Docker related files
    #[arg(long)]
    pub docker: bool,

    /// Check TypeScript/JavaScript related files
    #[arg(long)]
    pub typescript: bool,

    /// Check DevContainer related files
    #[arg(long)]
    pub devcontainer: bool,

    /// Check DevEnv related files
    #[arg(long)]
    pub devenv: bool,

    /// Check all file groups
    #[arg(long)]
    pub all: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// File groups selected on the command line.
    pub fn file_groups(&self) -> FileGroups {
        if self.all {
            return FileGroups::all();
        }

        [
            (self.augment, FileGroup::Augment),
            (self.docker, FileGroup::Docker),
            (self.typescript, FileGroup::TypeScript),
            (self.devcontainer, FileGroup::DevContainer),
            (self.devenv, FileGroup::DevEnv),
        ]
        .into_iter()
        .filter_map(|(enabled, group)| enabled.then_some(group))
        .collect()
    }
}

//! Reporting of check results.
//!
//! A [`Summary`] condenses the [`CheckResult`]s into the missing must-have
//! files, the missing should-have files and the files that could not be
//! checked. It is then written either as console text or as JSON.

use std::io::Write;

use serde::Serialize;

use crate::{catalog::Priority, checker::CheckResult, error::CheckError, exit_code::ExitCode};

/// Condensed view of a repository check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    missing_must_have: Vec<String>,
    missing_should_have: Vec<String>,
    errors: Vec<String>,
}

impl Summary {
    /// Builds the summary from check results. Missing nice-to-have files are
    /// not reported.
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut summary = Self::default();

        for result in results {
            let path = result.requirement().path();

            if let Some(error) = result.error() {
                summary.errors.push(format!("{path}: {error}"));
                continue;
            }

            if !result.exists() {
                match result.requirement().priority() {
                    Priority::MustHave => summary.missing_must_have.push(path.to_string()),
                    Priority::ShouldHave => summary.missing_should_have.push(path.to_string()),
                    Priority::NiceToHave => {}
                }
            }
        }

        summary
    }

    pub fn missing_must_have(&self) -> &[String] {
        &self.missing_must_have
    }

    pub fn missing_should_have(&self) -> &[String] {
        &self.missing_should_have
    }

    /// Errors formatted as `"<path>: <message>"`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// No must-have file is missing and every file could be checked.
    pub fn is_success(&self) -> bool {
        self.missing_must_have.is_empty() && self.errors.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if !self.errors.is_empty() {
            ExitCode::GeneralError
        } else if !self.missing_must_have.is_empty() {
            ExitCode::MissingMustHaveFiles
        } else {
            ExitCode::Success
        }
    }

    /// One-line description of the outcome.
    ///
    /// Errors are listed by path only.
    pub fn summary_line(&self) -> String {
        let mut line = String::from(if self.is_success() {
            "All must-have files are present"
        } else {
            "Some must-have files are missing"
        });

        if !self.missing_must_have.is_empty() {
            line.push_str(". Missing must-have files: ");
            line.push_str(&self.missing_must_have.join(", "));
        }

        if !self.missing_should_have.is_empty() {
            line.push_str(". Missing should-have files: ");
            line.push_str(&self.missing_should_have.join(", "));
        }

        if !self.errors.is_empty() {
            let paths: Vec<&str> = self
                .errors
                .iter()
                .map(|error| error.split(':').next().unwrap_or(error.as_str()))
                .collect();
            line.push_str(". Errors: ");
            line.push_str(&paths.join(", "));
        }

        line
    }

    /// Writes the human readable report.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] when writing fails.
    pub fn write_console(&self, out: &mut dyn Write) -> Result<(), CheckError> {
        writeln!(out, "Repository Validation Results")?;
        writeln!(out, "===========================")?;

        if self.is_success() {
            writeln!(out, "✓ All must-have files are present")?;
        } else {
            writeln!(out, "✗ Some must-have files are missing")?;
        }

        write_list(out, "Missing must-have files:", &self.missing_must_have)?;
        write_list(out, "Missing should-have files:", &self.missing_should_have)?;
        write_list(out, "Errors:", &self.errors)?;

        Ok(())
    }

    /// Writes the report as pretty printed JSON. Empty lists are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Report`] when serialization fails and
    /// [`CheckError::Io`] when writing fails.
    pub fn write_json(&self, out: &mut dyn Write) -> Result<(), CheckError> {
        let report = JsonReport {
            success: self.is_success(),
            missing_must_have_files: self.missing_must_have.clone(),
            missing_should_have_files: self.missing_should_have.clone(),
            errors: self.errors.clone(),
        };

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_must_have_files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_should_have_files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

fn write_list(out: &mut dyn Write, heading: &str, items: &[String]) -> Result<(), CheckError> {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(out, "{heading}")?;
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

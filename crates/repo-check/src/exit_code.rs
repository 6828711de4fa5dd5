//! Process exit codes.

use std::fmt;

/// Exit code reported by the `repo-check` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    /// All must-have files are present
    Success,
    /// A file could not be checked, or any other failure
    GeneralError,
    /// The repository path could not be resolved or is not a directory
    PathError,
    /// Some must-have files are missing
    MissingMustHaveFiles,
    /// Conflicting or invalid options
    InvalidConfig,
    /// The repository path could not be accessed
    FileAccessError,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::GeneralError => 1,
            ExitCode::PathError => 2,
            ExitCode::MissingMustHaveFiles => 3,
            ExitCode::InvalidConfig => 4,
            ExitCode::FileAccessError => 5,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(val: ExitCode) -> Self {
        val.code()
    }
}

impl From<ExitCode> for &'static str {
    fn from(val: ExitCode) -> Self {
        match val {
            ExitCode::Success => "success",
            ExitCode::GeneralError => "general_error",
            ExitCode::PathError => "path_error",
            ExitCode::MissingMustHaveFiles => "missing_must_have_files",
            ExitCode::InvalidConfig => "invalid_config",
            ExitCode::FileAccessError => "file_access_error",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s} ({})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL: [ExitCode; 6] = [
        ExitCode::Success,
        ExitCode::GeneralError,
        ExitCode::PathError,
        ExitCode::MissingMustHaveFiles,
        ExitCode::InvalidConfig,
        ExitCode::FileAccessError,
    ];

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<i32> = ALL.iter().map(|code| code.code()).collect();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_code_values() {
        let codes: Vec<i32> = ALL.into_iter().map(i32::from).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ExitCode::MissingMustHaveFiles.to_string(),
            "missing_must_have_files (3)"
        );
    }
}

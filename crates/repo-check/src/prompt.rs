//! Interactive selection of the optional file groups.

use std::io::{BufRead, Write};

use log::debug;

use crate::{
    catalog::{FileGroup, FileGroups},
    error::CheckError,
};

const CHOICES: [&str; 7] = [
    "1. Augment AI files (.augment-guidelines, .augmentignore)",
    "2. Docker files (Dockerfile, docker-compose.yaml, .dockerignore)",
    "3. TypeScript/JavaScript files (package.json, tsconfig.json)",
    "4. DevContainer files (.devcontainer.json)",
    "5. DevEnv files (devenv.nix)",
    "6. All file groups",
    "7. None (only check core files)",
];

/// Asks which optional file groups to check.
///
/// Reads one comma separated line from `input`. Empty input, including end
/// of input, selects the core files only.
///
/// # Errors
///
/// Returns [`CheckError::InvalidConfig`] listing every entry that is not a
/// number between 1 and 7, or [`CheckError::Io`] when reading or writing
/// fails.
pub fn prompt_file_groups(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<FileGroups, CheckError> {
    writeln!(output, "Which file groups do you want to check?")?;
    for choice in CHOICES {
        writeln!(output, "{choice}")?;
    }
    write!(output, "Enter your choices (comma-separated, e.g., 1,3,5): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let line = line.trim();
    if line.is_empty() {
        writeln!(output, "No input provided, defaulting to core files only")?;
        return Ok(FileGroups::none());
    }

    let groups = parse_choices(line)?;
    debug!(groups:?; "File groups selected");
    Ok(groups)
}

/// Parses a comma separated list of menu choices.
fn parse_choices(line: &str) -> Result<FileGroups, CheckError> {
    let mut groups = FileGroups::none();
    let mut invalid = Vec::new();

    for choice in line.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        match choice {
            "1" => groups.enable(FileGroup::Augment),
            "2" => groups.enable(FileGroup::Docker),
            "3" => groups.enable(FileGroup::TypeScript),
            "4" => groups.enable(FileGroup::DevContainer),
            "5" => groups.enable(FileGroup::DevEnv),
            "6" => groups = FileGroups::all(),
            "7" => {}
            _ => invalid.push(choice),
        }
    }

    if !invalid.is_empty() {
        return Err(CheckError::InvalidConfig(format!(
            "invalid choices: {} (must be numbers between 1-7)",
            invalid.join(", ")
        )));
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn prompt(input: &str) -> (Result<FileGroups, CheckError>, String) {
        let mut input = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        let result = prompt_file_groups(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_text() {
        let (result, output) = prompt("7\n");

        assert_eq!(result.unwrap(), FileGroups::none());
        assert_eq!(
            output,
            "Which file groups do you want to check?\n\
             1. Augment AI files (.augment-guidelines, .augmentignore)\n\
             2. Docker files (Dockerfile, docker-compose.yaml, .dockerignore)\n\
             3. TypeScript/JavaScript files (package.json, tsconfig.json)\n\
             4. DevContainer files (.devcontainer.json)\n\
             5. DevEnv files (devenv.nix)\n\
             6. All file groups\n\
             7. None (only check core files)\n\
             Enter your choices (comma-separated, e.g., 1,3,5): "
        );
    }

    #[test]
    fn test_multiple_choices() {
        let (result, _) = prompt(" 1, 3 ,5\n");

        let expected = FileGroups::none()
            .with(FileGroup::Augment)
            .with(FileGroup::TypeScript)
            .with(FileGroup::DevEnv);
        assert_eq!(result.unwrap(), expected);
    }

    #[test]
    fn test_all_choice() {
        let (result, _) = prompt("6\n");
        assert_eq!(result.unwrap(), FileGroups::all());
    }

    #[test]
    fn test_empty_input_defaults_to_core() {
        let (result, output) = prompt("\n");

        assert!(result.unwrap().is_empty());
        assert!(output.ends_with("No input provided, defaulting to core files only\n"));
    }

    #[test]
    fn test_end_of_input_defaults_to_core() {
        let (result, _) = prompt("");
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let (result, _) = prompt("2,,\n");
        assert_eq!(result.unwrap(), FileGroups::none().with(FileGroup::Docker));
    }

    #[test]
    fn test_invalid_choices() {
        let (result, _) = prompt("1,8,x\n");

        let err = result.unwrap_err();
        assert!(matches!(err, CheckError::InvalidConfig(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: invalid choices: 8, x (must be numbers between 1-7)"
        );
    }
}

//! End-to-end tests running repository checks against temporary directories.

use std::{fs, io::Cursor, path::Path};

use clap::Parser;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use repo_check::{Args, CheckError, ExitCode};

const CORE_FILES: [&str; 10] = [
    "README.md",
    ".gitignore",
    "LICENSE.md",
    "SECURITY.md",
    "AUTHORS",
    "MAINTAINERS.md",
    ".editorconfig",
    "CONTRIBUTING.md",
    "CODE-OF-CONDUCT.md",
    "CODEOWNERS",
];

fn repo_with(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for file in files {
        fs::write(dir.path().join(file), "").expect("Failed to write file");
    }
    dir
}

fn args(path: &Path, flags: &[&str]) -> Args {
    let path = path.to_str().expect("Temp path is not UTF-8");
    let argv = ["repo-check", "--path", path]
        .into_iter()
        .chain(flags.iter().copied());
    Args::try_parse_from(argv).expect("Failed to parse arguments")
}

fn run(args: &Args, input: &str) -> (Result<ExitCode, CheckError>, String) {
    let mut input = Cursor::new(input.as_bytes());
    let mut output = Vec::new();
    let result = repo_check::run(args, &mut input, &mut output);
    (result, String::from_utf8(output).expect("Output is not UTF-8"))
}

#[test]
fn test_complete_repository() {
    let dir = repo_with(&CORE_FILES);

    let (result, output) = run(&args(dir.path(), &[]), "");

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(output.contains("✓ All must-have files are present"));
}

#[test]
fn test_empty_repository_json() {
    let dir = repo_with(&[]);

    let (result, output) = run(&args(dir.path(), &["--json"]), "");

    assert_eq!(result.unwrap(), ExitCode::MissingMustHaveFiles);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "success": false,
            "missingMustHaveFiles": ["README.md", ".gitignore", "LICENSE.md", "SECURITY.md"],
            "missingShouldHaveFiles": [
                "AUTHORS",
                "MAINTAINERS.md",
                ".editorconfig",
                "CONTRIBUTING.md",
                "CODE-OF-CONDUCT.md",
                "CODEOWNERS"
            ],
        })
    );
}

#[test]
fn test_docker_group_missing_dockerfile() {
    let dir = repo_with(&CORE_FILES);

    let (result, output) = run(&args(dir.path(), &["--docker"]), "");

    assert_eq!(result.unwrap(), ExitCode::MissingMustHaveFiles);
    assert!(output.contains("Missing must-have files:\n  - Dockerfile\n"));
    assert!(output.contains("  - .dockerignore\n  - docker-compose.yaml\n"));
}

#[test]
fn test_nice_to_have_groups_do_not_fail() {
    let dir = repo_with(&CORE_FILES);

    let (result, output) = run(&args(dir.path(), &["--devcontainer", "--devenv"]), "");

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(!output.contains("devenv.nix"));
}

#[test]
fn test_interactive_selection() {
    let dir = repo_with(&CORE_FILES);

    let (result, output) = run(&args(dir.path(), &["--interactive"]), "3\n");

    assert_eq!(result.unwrap(), ExitCode::MissingMustHaveFiles);
    assert!(output.starts_with("Which file groups do you want to check?\n"));
    assert!(output.contains("  - package.json\n  - tsconfig.json\n"));
}

#[test]
fn test_interactive_skipped_when_groups_given() {
    let dir = repo_with(&CORE_FILES);

    let (result, output) = run(&args(dir.path(), &["--interactive", "--augment"]), "");

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(!output.contains("Which file groups"));
    assert!(output.contains("  - .augment-guidelines\n"));
}

#[test]
fn test_interactive_invalid_choice() {
    let dir = repo_with(&CORE_FILES);

    let (result, _) = run(&args(dir.path(), &["--interactive"]), "9\n");

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::InvalidConfig);
}

#[test]
fn test_json_and_interactive_conflict() {
    let dir = repo_with(&[]);

    let (result, output) = run(&args(dir.path(), &["--json", "--interactive"]), "");

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::InvalidConfig);
    assert!(output.is_empty());
}

#[test]
fn test_path_is_a_file() {
    let dir = repo_with(&["README.md"]);

    let (result, _) = run(&args(&dir.path().join("README.md"), &[]), "");

    let err = result.unwrap_err();
    assert!(matches!(err, CheckError::Path { .. }));
    assert_eq!(err.exit_code(), ExitCode::PathError);
}

#[test]
fn test_missing_path() {
    let dir = repo_with(&[]);

    let (result, _) = run(&args(&dir.path().join("does-not-exist"), &[]), "");

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::FileAccessError);
}

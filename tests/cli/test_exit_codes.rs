// Tests for CLI exit code behavior.
use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

use super::common::{self, flowlint_bin, write_workflow};

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(flowlint_bin())
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("FLOWLINT_CONFIG")
        .output()
        .expect("Failed to run flowlint")
}

#[test]
/// Exit code 0 for a workflow with no issues.
fn test_exit_code_0_valid_workflow() {
    let dir = TempDir::new().unwrap();
    write_workflow(dir.path(), "valid.json", &common::valid_workflow());
    let output = run_in(&dir, &["valid.json"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
/// Warnings alone still exit 0.
fn test_exit_code_0_warnings_only() {
    let dir = TempDir::new().unwrap();
    write_workflow(dir.path(), "invalid.json", &common::problem_workflow());
    let output = run_in(&dir, &["invalid.json"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
/// --strict turns warnings into a failing exit status.
fn test_exit_code_1_strict_with_warnings() {
    let dir = TempDir::new().unwrap();
    write_workflow(dir.path(), "invalid.json", &common::problem_workflow());
    let output = run_in(&dir, &["invalid.json", "--strict"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
/// --strict passes when the only issues are suppressed to INFO.
fn test_exit_code_0_strict_with_suppressed_rule() {
    let dir = TempDir::new().unwrap();
    write_workflow(dir.path(), "invalid.json", &common::problem_workflow());
    let output = run_in(
        &dir,
        &["invalid.json", "--strict", "--suppress", "error-handling"],
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
/// Missing file exits 1 with the load error on stderr.
fn test_exit_code_1_file_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir, &["missing.json"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: File not found"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
/// Every load failure class maps to exit 1.
fn test_exit_code_1_load_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wf.txt"), "{}").unwrap();
    fs::write(dir.path().join("broken.json"), "{invalid json}").unwrap();
    fs::write(dir.path().join("list.json"), "[]").unwrap();
    fs::create_dir(dir.path().join("folder.json")).unwrap();

    let cases = [
        ("wf.txt", "Invalid file extension: .txt (expected .json)"),
        ("broken.json", "Invalid JSON"),
        ("list.json", "Workflow must be a JSON object"),
        ("folder.json", "Not a file"),
    ];
    for (file, message) in cases {
        let output = run_in(&dir, &[file]);
        assert_eq!(output.status.code(), Some(1), "{file}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(message), "{file}: {stderr}");
    }
}

#[test]
/// Missing FILE argument is a usage error.
fn test_usage_error_without_file() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir, &[]);
    assert_eq!(output.status.code(), Some(2));
}

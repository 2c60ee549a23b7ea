// Tests for what the CLI prints.
use std::process::Command;

use tempfile::TempDir;

use super::common::{self, flowlint_bin, write_workflow};

#[test]
/// --json prints a parseable report.
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_workflow(dir.path(), "valid.json", &common::valid_workflow());
    let output = Command::new(flowlint_bin())
        .arg(&path)
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["workflow_name"], "Valid Workflow");
    assert_eq!(parsed["is_valid"], true);
    assert_eq!(parsed["summary"]["total_issues"], 0);
}

#[test]
/// Default output is the text report.
fn test_text_output() {
    let dir = TempDir::new().unwrap();
    let path = write_workflow(dir.path(), "hook.json", &common::webhook_workflow(false));
    let output = Command::new(flowlint_bin())
        .arg(&path)
        .current_dir(dir.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Validation Report: Webhook Workflow"));
    assert!(stdout.contains("[WARNING] webhook-timeout (node: My Webhook)"));
    assert!(stdout.contains("Suggestion:"));
}

#[test]
/// --suppress shows up as INFO in the JSON report.
fn test_suppress_flag_in_json() {
    let dir = TempDir::new().unwrap();
    let path = write_workflow(dir.path(), "wf.json", &common::problem_workflow());
    let output = Command::new(flowlint_bin())
        .arg(&path)
        .args(["--json", "--suppress", "error-handling"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["issues"][0]["severity"], "info");
    assert_eq!(parsed["summary"]["warnings"], 0);
}

#[test]
/// --completions prints a script without needing a file.
fn test_completions() {
    let output = Command::new(flowlint_bin())
        .args(["--completions", "bash"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("flowlint"));
}

use crate::suggestions::suggestion_for;
use crate::OutputFormatter;
use flowlint_enforce::types::{ValidationIssue, ValidationResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_result(&self, result: &ValidationResult) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("Validation Report: {}", result.workflow_name()));
        lines.push("=".repeat(50));

        if result.is_valid() {
            lines.push("Status: VALID (no errors)".to_string());
        } else {
            lines.push("Status: INVALID (errors found)".to_string());
        }
        lines.push(format!(
            "Issues: {} ({} errors, {} warnings)",
            result.total_issues(),
            result.error_count(),
            result.warning_count(),
        ));
        lines.push(String::new());

        if result.issues().is_empty() {
            lines.push("No issues found.".to_string());
            return lines.join("\n");
        }

        lines.push("Issues Found:".to_string());
        lines.push("-".repeat(30));
        for (i, issue) in result.issues().iter().enumerate() {
            push_issue(&mut lines, i + 1, issue);
        }

        lines.join("\n")
    }
}

fn push_issue(lines: &mut Vec<String>, index: usize, issue: &ValidationIssue) {
    let node_info = match &issue.node_name {
        Some(name) if !name.is_empty() => format!(" (node: {name})"),
        _ => String::new(),
    };
    lines.push(format!(
        "{index}. [{}] {}{node_info}",
        issue.severity.label(),
        issue.rule
    ));
    lines.push(format!("   {}", issue.message));
    lines.push(format!("   Suggestion: {}", suggestion_for(&issue.rule)));
    lines.push(String::new());
}

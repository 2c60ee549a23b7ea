use serde::{Deserialize, Serialize};

use flowlint_enforce::types::{Severity, ValidationResult};

use crate::suggestions::suggestion_for;

/// Structured form of a [`ValidationResult`], as emitted by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub workflow_name: String,
    pub is_valid: bool,
    pub summary: ReportSummary,
    pub issues: Vec<ReportIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_issues: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportIssue {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    /// Serialized as `null` for workflow-level issues.
    pub node_name: Option<String>,
    pub suggestion: String,
}

impl From<&ValidationResult> for JsonReport {
    fn from(result: &ValidationResult) -> Self {
        Self {
            workflow_name: result.workflow_name().to_string(),
            is_valid: result.is_valid(),
            summary: ReportSummary {
                total_issues: result.total_issues(),
                errors: result.error_count(),
                warnings: result.warning_count(),
            },
            issues: result
                .issues()
                .iter()
                .map(|issue| ReportIssue {
                    rule: issue.rule.clone(),
                    severity: issue.severity,
                    message: issue.message.clone(),
                    node_name: issue.node_name.clone(),
                    suggestion: suggestion_for(&issue.rule).to_string(),
                })
                .collect(),
        }
    }
}

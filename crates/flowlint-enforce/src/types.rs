use serde::{Deserialize, Serialize};

/// How serious an issue is. Ordered from most to least blocking; only
/// [`Severity::Error`] makes a workflow invalid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

impl Severity {
    /// Canonical serialized form: `"error"`, `"warning"`, `"info"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Uppercase label used in text reports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub rule: String,
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    /// Set only for issues scoped to one node.
    #[serde(default)]
    pub node_name: Option<String>,
}

impl ValidationIssue {
    /// A workflow-level WARNING.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            severity: Severity::default(),
            node_name: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn for_node(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = Some(node_name.into());
        self
    }
}

/// Outcome of validating one workflow.
///
/// Issues keep rule-execution order, then per-rule emission order. Counts
/// and validity are derived from the issue list on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    workflow_name: String,
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new(workflow_name: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            issues,
        }
    }

    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity.is_blocking())
    }

    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

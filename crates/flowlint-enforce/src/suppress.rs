use std::collections::HashSet;

use crate::types::{Severity, ValidationIssue};

/// Manages suppressed rules.
///
/// Issues from a suppressed rule are kept but demoted to INFO, so they still
/// show up in reports without affecting validity or strict mode.
#[derive(Debug, Default, Clone)]
pub struct SuppressionManager {
    suppressed_rules: HashSet<String>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule id to suppress (e.g., "webhook-timeout").
    pub fn suppress(&mut self, rule: &str) {
        self.suppressed_rules.insert(rule.to_string());
    }

    pub fn is_suppressed(&self, rule: &str) -> bool {
        self.suppressed_rules.contains(rule)
    }

    /// Apply suppression to an issue. Unsuppressed issues pass through unchanged.
    pub fn apply(&self, issue: ValidationIssue) -> ValidationIssue {
        if self.is_suppressed(&issue.rule) {
            issue.with_severity(Severity::Info)
        } else {
            issue
        }
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed_rules.len()
    }
}

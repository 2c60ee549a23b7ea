//! Remediation text per rule id.

use flowlint_enforce::rules::{ERROR_HANDLING, WEBHOOK_TIMEOUT};

/// Returned for rule ids without a dedicated entry.
pub const DEFAULT_SUGGESTION: &str = "Review the workflow configuration for this issue.";

const SUGGESTIONS: &[(&str, &str)] = &[
    (
        ERROR_HANDLING,
        "Add an Error Trigger node to handle failures, \
         or set 'errorWorkflow' in workflow settings to delegate error handling.",
    ),
    (
        WEBHOOK_TIMEOUT,
        "Configure a timeout in the Webhook node's options to prevent \
         hanging requests. Recommended: 30-60 seconds for typical API calls.",
    ),
];

pub fn suggestion_for(rule: &str) -> &'static str {
    SUGGESTIONS
        .iter()
        .find(|(id, _)| *id == rule)
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_SUGGESTION)
}

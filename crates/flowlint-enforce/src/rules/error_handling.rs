use flowlint_core::Workflow;

use super::ERROR_HANDLING;
use crate::types::ValidationIssue;

const ERROR_TRIGGER: &str = "errortrigger";

/// Check `error-handling`: the workflow must either contain an Error Trigger
/// node or delegate failures via `settings.errorWorkflow`.
///
/// Workflow-level, so at most one issue per run.
pub fn check_error_handling(workflow: &Workflow) -> Vec<ValidationIssue> {
    let has_error_trigger = workflow.nodes().any(|n| n.type_contains(ERROR_TRIGGER));
    let has_error_workflow = workflow.settings().is_truthy("errorWorkflow");

    if has_error_trigger || has_error_workflow {
        return Vec::new();
    }

    vec![ValidationIssue::new(
        ERROR_HANDLING,
        "Workflow has no error handling. Add an Error Trigger node or set errorWorkflow in settings.",
    )]
}

use flowlint_core::Workflow;

use super::WEBHOOK_TIMEOUT;
use crate::types::ValidationIssue;

const WEBHOOK: &str = "webhook";

/// Response modes in which the caller is held open until the workflow answers.
const BLOCKING_RESPONSE_MODES: [&str; 2] = ["responseNode", "lastNode"];

/// Check `webhook-timeout`: a webhook that waits for the workflow to respond
/// must set `parameters.options.timeout`.
///
/// Only key presence is checked. One issue per offending node.
pub fn check_webhook_timeout(workflow: &Workflow) -> Vec<ValidationIssue> {
    workflow
        .nodes()
        .filter(|node| node.type_contains(WEBHOOK))
        .filter_map(|node| {
            let params = node.parameters();
            let response_mode = params.str_or("responseMode", "");
            if !BLOCKING_RESPONSE_MODES.contains(&response_mode) {
                return None;
            }
            if params.section("options").contains_key("timeout") {
                return None;
            }
            let name = node.name();
            Some(
                ValidationIssue::new(
                    WEBHOOK_TIMEOUT,
                    format!("Webhook '{name}' waits for response but has no timeout configured."),
                )
                .for_node(name),
            )
        })
        .collect()
}

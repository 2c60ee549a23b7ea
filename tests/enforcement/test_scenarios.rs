// End-to-end validation scenarios over in-memory documents.
use flowlint_core::Workflow;
use flowlint_enforce::rules::{ERROR_HANDLING, WEBHOOK_TIMEOUT};
use flowlint_enforce::{validate, Severity};
use serde_json::json;

use super::common;

#[test]
/// A workflow with an Error Trigger node has no issues.
fn test_valid_workflow_has_no_issues() {
    let result = validate(&Workflow::new(common::valid_workflow()));
    assert!(result.is_valid());
    assert!(result.issues().is_empty());
    assert_eq!(result.workflow_name(), "Valid Workflow");
}

#[test]
/// Warnings alone never make a workflow invalid.
fn test_missing_error_handling_is_a_warning() {
    let result = validate(&Workflow::new(common::problem_workflow()));
    assert_eq!(result.total_issues(), 1);
    assert_eq!(result.issues()[0].rule, ERROR_HANDLING);
    assert_eq!(result.issues()[0].severity, Severity::Warning);
    assert!(result.is_valid());
}

#[test]
/// A blocking webhook without timeout adds a node-scoped issue after error-handling.
fn test_webhook_without_timeout() {
    let result = validate(&Workflow::new(common::webhook_workflow(false)));
    let issues = result.issues();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].rule, ERROR_HANDLING);
    assert!(issues[0].node_name.is_none());
    assert_eq!(issues[1].rule, WEBHOOK_TIMEOUT);
    assert_eq!(issues[1].node_name.as_deref(), Some("My Webhook"));
}

#[test]
/// Configuring `options.timeout` clears the webhook issue.
fn test_webhook_with_timeout() {
    let result = validate(&Workflow::new(common::webhook_workflow(true)));
    let rules: Vec<_> = result.issues().iter().map(|i| i.rule.as_str()).collect();
    assert_eq!(rules, vec![ERROR_HANDLING]);
}

#[test]
/// The empty document gets the default name and one error-handling warning.
fn test_empty_document() {
    let result = validate(&Workflow::new(json!({})));
    assert_eq!(result.workflow_name(), "Unnamed Workflow");
    assert_eq!(result.total_issues(), 1);
    assert_eq!(result.issues()[0].rule, ERROR_HANDLING);
    assert!(result.is_valid());
}

#[test]
/// Webhooks in fire-and-forget mode are never flagged, whatever else is present.
fn test_mixed_workflow() {
    let result = validate(&Workflow::new(json!({
        "name": "Mixed",
        "settings": {"errorWorkflow": "42"},
        "nodes": [
            {"name": "Inbound", "type": "n8n-nodes-base.webhook",
             "parameters": {"responseMode": "onReceived"}},
            {"name": "Sync", "type": "n8n-nodes-base.webhook",
             "parameters": {"responseMode": "lastNode"}},
            {"name": "Respond", "type": "n8n-nodes-base.respondToWebhook",
             "parameters": {"responseMode": "responseNode", "options": {"timeout": 5}}}
        ]
    })));
    let scoped: Vec<_> = result
        .issues()
        .iter()
        .map(|i| (i.rule.as_str(), i.node_name.as_deref()))
        .collect();
    assert_eq!(scoped, vec![(WEBHOOK_TIMEOUT, Some("Sync"))]);
}

//! The fixed rule set.
//!
//! Each rule is a plain function over a [`Workflow`]. Rules never fail: a
//! malformed document simply yields whatever the defaulted fields imply.
//! Adding a rule means adding a module here and an entry to [`RULES`].

mod error_handling;
mod webhook_timeout;

use flowlint_core::Workflow;

use crate::types::ValidationIssue;

pub use error_handling::check_error_handling;
pub use webhook_timeout::check_webhook_timeout;

pub const ERROR_HANDLING: &str = "error-handling";
pub const WEBHOOK_TIMEOUT: &str = "webhook-timeout";

pub type CheckFn = fn(&Workflow) -> Vec<ValidationIssue>;

/// A registered rule check.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    pub check: CheckFn,
}

impl Rule {
    pub fn run(&self, workflow: &Workflow) -> Vec<ValidationIssue> {
        (self.check)(workflow)
    }
}

/// All rules in execution order.
pub static RULES: &[Rule] = &[
    Rule {
        id: ERROR_HANDLING,
        description: "Workflow has an Error Trigger node or an errorWorkflow setting",
        check: check_error_handling,
    },
    Rule {
        id: WEBHOOK_TIMEOUT,
        description: "Webhooks that wait for a response configure a timeout",
        check: check_webhook_timeout,
    },
];

pub fn rules() -> &'static [Rule] {
    RULES
}

pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

pub fn is_known_rule(id: &str) -> bool {
    find_rule(id).is_some()
}

//! Rule checks and validation engine for flowlint.
//!
//! Validates a workflow document against a fixed set of structural rules:
//! - `error-handling`: no Error Trigger node and no `errorWorkflow` setting
//! - `webhook-timeout`: webhook waits for a response without a timeout
//!
//! Every rule is total over any document, so validation has no failure path.
//! An "invalid" workflow is an ordinary [`ValidationResult`](types::ValidationResult).

pub mod engine;
pub mod rules;
pub mod suppress;
pub mod types;

pub use engine::{validate, Validator};
pub use types::{Severity, ValidationIssue, ValidationResult};

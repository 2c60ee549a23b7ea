//! Output formatters for flowlint validation results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured report
//! - **Human** (default): Plain-text report with remediation suggestions

pub mod human;
pub mod json;
pub mod report;
pub mod suggestions;

use flowlint_enforce::types::ValidationResult;

pub trait OutputFormatter {
    fn format_result(&self, result: &ValidationResult) -> String;
}

use crate::report::JsonReport;
use crate::OutputFormatter;
use flowlint_enforce::types::ValidationResult;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ValidationResult) -> String {
        serde_json::to_string_pretty(&JsonReport::from(result)).unwrap_or_default()
    }
}

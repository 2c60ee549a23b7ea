use flowlint_core::config::LintConfig;
use flowlint_core::Workflow;

use crate::rules::{self, Rule};
use crate::suppress::SuppressionManager;
use crate::types::ValidationResult;

/// Runs the registered rules against workflows.
///
/// Holds no per-run state; one validator can check any number of workflows,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<&'static Rule>,
    suppressions: SuppressionManager,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Every registered rule, nothing suppressed.
    pub fn new() -> Self {
        Self {
            rules: rules::rules().iter().collect(),
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create a validator configured from a `LintConfig`.
    ///
    /// Disabled rules are skipped entirely. Unknown rule ids are ignored
    /// here; callers that want to report them use [`unknown_rules`].
    pub fn with_config(config: &LintConfig) -> Self {
        let mut suppressions = SuppressionManager::new();
        for rule in &config.suppress {
            suppressions.suppress(rule);
        }
        Self {
            rules: rules::rules()
                .iter()
                .filter(|r| config.is_rule_enabled(r.id))
                .collect(),
            suppressions,
        }
    }

    /// Report issues from `rule` as INFO.
    pub fn suppress(&mut self, rule: &str) {
        self.suppressions.suppress(rule);
    }

    /// Rules this validator will run, in execution order.
    pub fn active_rules(&self) -> impl Iterator<Item = &'static Rule> + '_ {
        self.rules.iter().copied()
    }

    /// Run every active rule and collect the issues into one result.
    pub fn validate(&self, workflow: &Workflow) -> ValidationResult {
        let workflow_name = workflow.name();
        let mut issues = Vec::new();

        for rule in &self.rules {
            let found = rule.run(workflow);
            tracing::debug!(
                workflow = workflow_name,
                rule = rule.id,
                issues = found.len(),
                "rule checked"
            );
            issues.extend(found.into_iter().map(|i| self.suppressions.apply(i)));
        }

        ValidationResult::new(workflow_name, issues)
    }
}

/// Validate with the default rule set.
pub fn validate(workflow: &Workflow) -> ValidationResult {
    Validator::new().validate(workflow)
}

/// Rule ids mentioned in `config` that are not registered, deduplicated,
/// in first-mention order.
pub fn unknown_rules(config: &LintConfig) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    for id in config.referenced_rules() {
        if !rules::is_known_rule(id) && !unknown.iter().any(|u| u == id) {
            unknown.push(id.to_string());
        }
    }
    unknown
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

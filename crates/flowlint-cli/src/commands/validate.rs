use std::path::{Path, PathBuf};

use flowlint_core::config::{ConfigError, LintConfig, CONFIG_FILE_NAME};
use flowlint_core::loader::load_workflow;
use flowlint_enforce::engine::{unknown_rules, Validator};
use flowlint_enforce::types::ValidationResult;
use flowlint_output::OutputFormatter;

/// Options for a single `flowlint <file>` run.
#[derive(Debug, Default)]
pub struct ValidateArgs {
    pub file: PathBuf,
    pub strict: bool,
    pub suppress: Vec<String>,
    pub config: Option<PathBuf>,
}

/// Run `flowlint <file>`: load, validate, print the report.
///
/// Exit codes: 0 valid, 1 invalid or failed to load (or warnings under
/// `--strict`).
pub fn run(formatter: &dyn OutputFormatter, args: ValidateArgs) -> i32 {
    let mut config = match resolve_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    config.suppress.extend(args.suppress);
    let strict = args.strict || config.strict;

    for rule in unknown_rules(&config) {
        tracing::warn!("unknown rule '{rule}' ignored");
    }

    let loaded = match load_workflow(&args.file) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    tracing::debug!(path = %loaded.path.display(), "workflow loaded");

    let result = Validator::with_config(&config).validate(&loaded.workflow);
    println!("{}", formatter.format_result(&result));

    exit_code(&result, strict)
}

/// An explicit `--config` must load; otherwise `./flowlint.json` is optional.
fn resolve_config(explicit: Option<&Path>) -> Result<LintConfig, ConfigError> {
    if let Some(path) = explicit {
        return LintConfig::from_file(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => {
            tracing::debug!("looking for {} in {}", CONFIG_FILE_NAME, cwd.display());
            Ok(LintConfig::load(&cwd))
        }
        Err(_) => Ok(LintConfig::default()),
    }
}

fn exit_code(result: &ValidationResult, strict: bool) -> i32 {
    if !result.is_valid() || (strict && result.warning_count() > 0) {
        1
    } else {
        0
    }
}

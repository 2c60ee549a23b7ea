//! flowlint CLI: structural linting for n8n workflow files.
//!
//! `flowlint <file>` loads a workflow, runs every enabled rule, and prints a
//! text (default) or JSON (`--json`) report. See `flowlint --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::Cli;
use commands::validate::ValidateArgs;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(shell) = cli.completions {
        std::process::exit(commands::completion::run(shell));
    }

    let formatter: Box<dyn flowlint_output::OutputFormatter> = if cli.json {
        Box::new(flowlint_output::json::JsonFormatter)
    } else {
        Box::new(flowlint_output::human::HumanFormatter)
    };

    let Some(file) = cli.file else {
        // clap enforces FILE unless --completions was given
        eprintln!("Error: no workflow file given");
        std::process::exit(2);
    };

    let exit_code = commands::validate::run(
        &*formatter,
        ValidateArgs {
            file,
            strict: cli.strict,
            suppress: cli.suppress,
            config: cli.config,
        },
    );

    std::process::exit(exit_code);
}

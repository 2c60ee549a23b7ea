use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli_args::Cli;

/// Run `flowlint --completions <shell>` -- write a completion script to stdout.
pub fn run(shell: Shell) -> i32 {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "flowlint", &mut std::io::stdout());
    0
}

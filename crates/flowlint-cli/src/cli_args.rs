use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "flowlint",
    version,
    about = "Validate n8n workflow JSON files"
)]
pub(crate) struct Cli {
    /// Path to the workflow JSON file
    #[arg(required_unless_present = "completions")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Report issues from this rule as INFO (repeatable)
    #[arg(long, value_name = "RULE")]
    pub suppress: Vec<String>,

    /// Config file (default: ./flowlint.json when present)
    #[arg(long, value_name = "PATH", env = "FLOWLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log rule execution to stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

//! Docket CLI - Legal intake gap analysis from the command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract(args) => commands::execute_extract(args),
        Command::Analyze(args) => commands::execute_analyze(args),
        Command::Recommend(args) => commands::execute_recommend(args),
        Command::Draft(args) => commands::execute_draft(args),
        Command::Requirements(args) => commands::execute_requirements(args),
    }
}

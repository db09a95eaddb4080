//! CLI entry point for loading a puzzle input and querying its grid

use clap::Parser;
use puzzlegrid::io::cli::{Cli, InputProcessor};
use puzzlegrid::io::configuration::{DEFAULT_LOG_DIRECTIVE, LOG_ENV_VAR};
use tracing_subscriber::EnvFilter;

fn main() -> puzzlegrid::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let processor = InputProcessor::new(cli);
    processor.run(&mut std::io::stdout().lock())
}

//! Bach Tracking
//!
//! Personal catalog of classical concert attendance.
//!
//! This is the main entry point: it installs logging and hands over to the
//! command-line interface.

use anyhow::Result;
use bach_cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    bach_cli::run(cli)
}

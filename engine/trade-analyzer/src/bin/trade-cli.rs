//! Trade CLI binary
//!
//! Command-line interface for analyzing trade proposals.

use anyhow::Result;
use clap::Parser;
use trade_analyzer::cli::{Cli, CliHandler};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create CLI handler
    let handler = CliHandler::new(cli.config.as_deref())?;

    // Handle command
    handler.handle_command(cli.command)?;

    Ok(())
}

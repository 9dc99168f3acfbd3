// csvboy/src/main.rs
//! csvboy entry point.
//!
//! Parses arguments, sets up logging and hands off to the sanitize command.

use anyhow::Result;
use clap::Parser;
use log::info;

use csvboy::cli::Cli;
use csvboy::commands::sanitize::{run_sanitize_opts, SanitizeOptions};
use csvboy::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    info!("csvboy started. Version: {}", env!("CARGO_PKG_VERSION"));

    let opts = SanitizeOptions::from_cli(&cli)?;
    run_sanitize_opts(&opts)
}

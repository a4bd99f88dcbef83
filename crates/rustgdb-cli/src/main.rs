//! rustgdb command-line interface
//!
//! Headless access to a workspace's persisted breakpoints: inspect them,
//! edit them, and check how they would be restored after files changed.

mod args;
mod commands;
mod console;
mod router;

use args::Cli;
use clap::Parser;
use rustgdb_core::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&commands::logging_config(&cli), cli.verbose);
    router::route(cli)
}

/// RUST_LOG wins over --verbose, which wins over the configured level
fn init_logging(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

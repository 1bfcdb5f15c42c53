//! sqlfront CLI
//!
//! Command-line tool for inspecting SQLite SQL.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sqlfront_cli::{read_source, run, Cli};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = read_source(cli.file.as_deref()).context("failed to load SQL")?;
    let stdout = std::io::stdout();
    let color = cli.color.enabled(stdout.is_terminal());
    let mut out = stdout.lock();
    let summary = run(&cli, &source, color, &mut out)?;

    Ok(ExitCode::from(summary.exit_code(cli.fail_on_error)))
}

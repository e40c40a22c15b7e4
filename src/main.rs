//! Time-travel tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_tictactoe::{AppConfig, cli::Cli, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.log_file, cli.no_mouse);

    init_tracing(&config)?;
    info!(?config, "Starting timetravel_tictactoe");

    tui::run_tui(&config)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.logging().file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            config.logging().file().display()
        )
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

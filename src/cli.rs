//! Command-line interface for timetravel_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe with move history and time travel.
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal and rewind to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetravel_tictactoe"]);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "timetravel_tictactoe",
            "--config",
            "game.toml",
            "--log-file",
            "out.log",
            "--no-mouse",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert!(cli.no_mouse);
    }
}

//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the first player (plays X)
    #[arg(long)]
    pub first: Option<String>,

    /// Name of the second player (plays O)
    #[arg(long)]
    pub second: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading moves from stdin
    Play,

    /// Apply a fixed list of moves and print each report as JSON
    Replay {
        /// Moves as `row,col`, 0-indexed, first player moving first
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["tictactoe", "--first", "Ann", "replay", "0,0", "-1,2"]);
        assert_eq!(cli.first.as_deref(), Some("Ann"));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0,0".to_string(), "-1,2".to_string()],
            })
        );
    }
}

//! Command-line interface for inception tic-tac-toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inception Tic-Tac-Toe - nine boards, one game
#[derive(Parser, Debug)]
#[command(name = "inception")]
#[command(about = "Inception tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./inception.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay a move list and print the final board
    Replay {
        /// Moves as four digits RCrc (meta row, meta col, sub row, sub col)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,

        /// Fail on the first rejected move instead of skipping it
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn action(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_plays() {
        let cli = Cli::try_parse_from(["inception"]).unwrap();
        assert_eq!(cli.action(), Command::Play);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "inception", "replay", "--strict", "1100", "1,1,0,1", "--config", "alt.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.action(),
            Command::Replay {
                moves: vec!["1100".to_string(), "1,1,0,1".to_string()],
                json: false,
                strict: true,
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["inception", "replay"]).is_err());
    }
}

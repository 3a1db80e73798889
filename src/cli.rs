//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_engine::Position;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play,

    /// Apply moves in order and print the result
    Replay {
        /// Cell indices (0-8) or labels such as `center`, X first; illegal requests are skipped
        #[arg(value_parser = parse_cell)]
        indices: Vec<usize>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses a replay move: a cell index or a position label.
///
/// Any index is accepted here; the game itself ignores ones off the board.
fn parse_cell(s: &str) -> Result<usize, String> {
    s.trim()
        .parse::<usize>()
        .ok()
        .or_else(|| Position::from_label(s).map(Position::to_index))
        .ok_or_else(|| format!("'{}' is neither a cell index nor a position label", s))
}

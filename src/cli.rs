//! Command-line interface for the tictactoe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Mode, Player};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe engine with a rule-based computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the console
    Play {
        /// Path to an engine config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Starting mode (two-player or vs-computer)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Delay before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print each state change as a JSON line instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Print the move the computer would play on a board
    Suggest {
        /// Board as 9 cells of X, O or _ (separators | / and spaces allowed)
        board: String,

        /// Mark to move for (x or o)
        #[arg(long, default_value = "o", value_parser = parse_player)]
        mark: Player,
    },

    /// Report whether a board is won, drawn or still open
    Evaluate {
        /// Board as 9 cells of X, O or _ (separators | / and spaces allowed)
        board: String,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        other => Err(format!("expected x or o, got {:?}", other)),
    }
}

//! tictactoe - console front end for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_core::{Board, EngineConfig, Player, check_winner, is_draw, select_move, winning_line};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            delay_ms,
            json,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(&path)?,
                None => EngineConfig::default(),
            };
            if let Some(mode) = mode {
                engine_config = engine_config.with_starting_mode(mode);
            }
            if let Some(delay_ms) = delay_ms {
                engine_config = engine_config.with_computer_delay_ms(delay_ms);
            }
            init_tracing(engine_config.log_filter());
            console::run_console(engine_config, json).await
        }
        Command::Suggest { board, mark } => {
            init_tracing("warn");
            suggest(&board, mark)
        }
        Command::Evaluate { board } => {
            init_tracing("warn");
            evaluate(&board)
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the computer's choice for `mark` on `board`.
#[instrument]
fn suggest(board: &str, mark: Player) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    match select_move(&board, mark) {
        Some(pos) => println!("{} ({})", pos.to_index(), pos),
        None => println!("Board is full"),
    }
    info!("Suggestion printed");
    Ok(())
}

/// Prints the state of `board`.
#[instrument]
fn evaluate(board: &str) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    println!("{}\n", board);
    match (check_winner(&board), winning_line(&board)) {
        (Some(winner), Some(line)) => println!("Player {} wins on {:?}", winner, line.indices()),
        _ if is_draw(&board) => println!("It's a draw!"),
        _ => println!("In progress"),
    }
    Ok(())
}

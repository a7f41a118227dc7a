//! Line-oriented console front end.
//!
//! Reads commands from stdin, forwards them to a [`Controller`] running on
//! its own task, and prints every event it publishes.

mod input;
mod render;

use anyhow::Result;
use input::{HELP, Input, parse_line};
use tictactoe_core::{Controller, EngineConfig, GameEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Runs an interactive game until the user quits or stdin closes.
#[instrument(skip(config))]
pub async fn run_console(config: EngineConfig, json: bool) -> Result<()> {
    info!("Starting console game");

    let (controller, mut events) = Controller::new(&config);
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let controller_task = tokio::spawn(controller.run(command_rx));

    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if let Err(e) = print_event(&event, json) {
                warn!(error = %e, "Failed to print event");
            }
        }
    });

    if !json {
        println!("{}", HELP);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(Input::Command(command)) => {
                debug!(?command, "Forwarding command");
                command_tx.send(command)?;
            }
            Ok(Input::Help) => println!("{}", HELP),
            Ok(Input::Quit) => break,
            Err(message) => eprintln!("{}", message),
        }
    }

    drop(command_tx);
    let session = controller_task.await?;
    printer.await?;
    info!(
        generation = session.generation(),
        status = ?session.status(),
        "Console game finished"
    );
    Ok(())
}

fn print_event(event: &GameEvent, json: bool) -> Result<()> {
    match (event, json) {
        (GameEvent::Updated(snapshot), false) => println!("\n{}", render::render(snapshot)),
        (GameEvent::Updated(snapshot), true) => println!("{}", serde_json::to_string(snapshot)?),
        (GameEvent::ComputerThinking { .. }, false) => println!("Computer is thinking..."),
        (GameEvent::ComputerThinking { .. }, true) => {}
    }
    Ok(())
}

//! Parsing of console input lines.

use tictactoe_core::{Command, Mode, Position};

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward a command to the controller.
    Command(Command),
    /// Print the help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text listing the accepted inputs.
pub const HELP: &str = "\
Commands:
  0-8 or a label (e.g. center, top-left)  play a square
  r                                       restart
  m two-player | m vs-computer            change mode
  h                                       help
  q                                       quit";

/// Parses one input line.
pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    match words.next() {
        None => Err("Empty input; type h for help".to_string()),
        Some("q" | "quit") => Ok(Input::Quit),
        Some("h" | "help" | "?") => Ok(Input::Help),
        Some("r" | "restart") => Ok(Input::Command(Command::Restart)),
        Some("m" | "mode") => {
            let name = words.next().ok_or("Missing mode name")?;
            let mode = name
                .parse::<Mode>()
                .map_err(|_| format!("Unknown mode {:?}", name))?;
            Ok(Input::Command(Command::SetMode(mode)))
        }
        Some(_) => Position::from_label_or_number(line)
            .map(|pos| Input::Command(Command::Play(pos.to_index())))
            .ok_or_else(|| format!("Not a square: {:?}", line)),
    }
}

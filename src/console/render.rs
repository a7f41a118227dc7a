//! Stateless text rendering of session snapshots.

use tictactoe_core::{Position, SessionSnapshot, Square};

/// Renders the board with the winning line bracketed, plus the status line.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let mark = match snapshot.board().get(pos) {
                Square::Empty => pos.to_index().to_string(),
                Square::Occupied(player) => player.to_string(),
            };
            let highlighted = snapshot
                .winning_line()
                .is_some_and(|line| line.contains(pos));
            if highlighted {
                out.push_str(&format!("[{}]", mark));
            } else {
                out.push_str(&format!(" {} ", mark));
            }
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out.push_str(&format!(
        "{} ({}, game {})",
        snapshot.message(),
        snapshot.mode(),
        snapshot.generation() + 1
    ));
    out
}

//! Outcome invariant: the recorded status agrees with the rules.

use super::super::rules::{check_winner, is_draw, is_full};
use super::super::{GameStatus, Session};
use super::Invariant;

/// Invariant: the status is exactly what the rules say about the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<Session> for OutcomeConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        match session.status() {
            GameStatus::InProgress => check_winner(board).is_none() && !is_full(board),
            GameStatus::Won(player) => check_winner(board) == Some(player),
            GameStatus::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}

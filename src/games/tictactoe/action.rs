//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move request either
//! places a mark or is ignored for a rule reason; ignoring is never an error.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The player to move is not controlled by the caller.
    #[display("It's not your turn; waiting for {}", _0)]
    NotYourTurn(Player),
}

/// Result of a move request that named a valid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Placed(Move),
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns the placed move, if any.
    pub fn placed(self) -> Option<Move> {
        match self {
            MoveOutcome::Placed(mov) => Some(mov),
            MoveOutcome::Ignored(_) => None,
        }
    }
}

/// A cell index outside 0-8.
///
/// This is a caller bug, not a game rule; the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cell index {} out of range (0-8) at {}:{}", index, file, line)]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
    /// Line number where the index was rejected.
    pub line: u32,
    /// Source file where the index was rejected.
    pub file: &'static str,
}

impl OutOfRange {
    /// Creates the error with caller location tracking.
    #[track_caller]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Converts a raw cell index into a position.
#[track_caller]
pub fn position_at(index: usize) -> Result<Position, OutOfRange> {
    match Position::from_index(index) {
        Some(pos) => Ok(pos),
        None => Err(OutOfRange::new(index)),
    }
}

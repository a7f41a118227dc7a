//! Rule-based move selection for the computer opponent.
//!
//! The selector is greedy: it never misses an immediate win or an
//! immediate block, but it does no lookahead and can be beaten.

use super::{Board, LINES, Player, Position, Square};
use tracing::{debug, instrument};

/// Picks the computer's move for `own` on `board`.
///
/// Rules are tried in order and the first that applies decides:
/// 1. complete a line of ours
/// 2. block a line of the opponent's
/// 3. take the center
/// 4. take the first free corner (0, 2, 6, 8)
/// 5. take the lowest free square
///
/// Returns `None` only on a full board.
#[instrument]
pub fn select_move(board: &Board, own: Player) -> Option<Position> {
    if let Some(pos) = completing_square(board, own) {
        debug!(?pos, "Completing own line");
        return Some(pos);
    }
    if let Some(pos) = completing_square(board, own.opponent()) {
        debug!(?pos, "Blocking opponent line");
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }
    Position::CORNERS
        .into_iter()
        .chain(Position::ALL)
        .find(|pos| board.is_empty(*pos))
}

/// Finds the empty square of the first line holding exactly two of `player`'s marks.
fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let mut held = 0;
        let mut empty = None;
        for pos in line.positions() {
            match board.get(pos) {
                Square::Occupied(p) if p == player => held += 1,
                Square::Empty => empty = Some(pos),
                Square::Occupied(_) => {}
            }
        }
        if held == 2 { empty } else { None }
    })
}

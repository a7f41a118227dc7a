//! Monotonic board check: a placement fills exactly one empty square.

use super::super::{Board, Move, Square};

/// Checks that `after` is `before` with only `mov` added.
///
/// Squares never go back to empty and never change owner, so any
/// other difference is a corrupted transition.
pub fn single_placement(before: &Board, after: &Board, mov: Move) -> bool {
    let target = mov.position.to_index();
    before
        .squares()
        .iter()
        .zip(after.squares())
        .enumerate()
        .all(|(index, (was, now))| {
            if index == target {
                *was == Square::Empty && *now == Square::Occupied(mov.player)
            } else {
                was == now
            }
        })
}

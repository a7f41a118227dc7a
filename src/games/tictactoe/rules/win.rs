//! Win detection logic for tic-tac-toe.

use super::super::{Board, LINES, Line, Player, Square};
use tracing::instrument;

/// Returns the first completed line, scanning rows, columns, then diagonals.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of [`winning_line`], so the two always agree.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let line = winning_line(board)?;
    board.get(line.positions()[0]).player()
}

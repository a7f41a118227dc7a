//! Turn order invariant: the mover is implied by the mark counts.

use super::super::{Player, Session};
use super::Invariant;

/// Invariant: while the game is active, X moves iff the counts are equal.
///
/// Finished games keep the last mover, so they are not constrained.
pub struct TurnOrderInvariant;

impl Invariant<Session> for TurnOrderInvariant {
    fn holds(session: &Session) -> bool {
        if !session.is_active() {
            return true;
        }
        let board = session.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        session.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

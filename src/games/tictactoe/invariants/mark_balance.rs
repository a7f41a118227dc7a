//! Mark balance invariant: X is never behind O and never two ahead.

use super::super::{Player, Session};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// X always moves first and turns alternate, so any other count means
/// a mark was written out of turn.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or one more"
    }
}

//! Game modes and who controls each mark.

use super::Player;
use serde::{Deserialize, Serialize};

/// Game mode.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays X against the computer playing O.
    VsComputer,
}

/// Who controls a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Moves arrive through `Session::apply_move`.
    Human,
    /// Moves are chosen by the strategy.
    Computer,
}

impl Mode {
    /// Returns who controls `player` in this mode.
    pub fn seat(self, player: Player) -> Seat {
        match (self, player) {
            (Mode::VsComputer, Player::O) => Seat::Computer,
            _ => Seat::Human,
        }
    }
}

//! The eight winning lines of the board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Three positions that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// All winning lines: rows, then columns, then diagonals.
///
/// Every scan over lines uses this order, which makes results
/// deterministic when more than one line qualifies.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        // Rows
        Line::new(TopLeft, TopCenter, TopRight),
        Line::new(MiddleLeft, Center, MiddleRight),
        Line::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        Line::new(TopLeft, MiddleLeft, BottomLeft),
        Line::new(TopCenter, Center, BottomCenter),
        Line::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        Line::new(TopLeft, Center, BottomRight),
        Line::new(TopRight, Center, BottomLeft),
    ]
};

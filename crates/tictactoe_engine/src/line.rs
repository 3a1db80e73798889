//! The eight winning lines of the board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A winning triple: three positions in a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All lines in detection order: rows, then columns, then diagonals.
    ///
    /// Order matters: the first complete line found is the one reported.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ]),
        Line([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        Line([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]),
        Line([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        Line([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the position lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

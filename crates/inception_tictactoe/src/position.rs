//! Named positions on a 3x3 grid.
//!
//! The same nine positions address a sub-board inside the meta-board and a
//! cell inside a sub-board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on a 3x3 grid (row-major index 0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to grid index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a row and column, each in `0..3`.
    #[instrument(level = "trace")]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Moves one step in the given direction, staying on the grid.
    ///
    /// Returns `None` when the step would leave the 3x3 grid.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::from_row_col(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! A single 3x3 tic-tac-toe board inside the meta-board.

use crate::action::InvalidMove;
use crate::rules::{self, MarkGrid};
use crate::types::{Cell, Player, SubBoardStatus};
use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 board of cells with a derived status.
///
/// The status is recomputed from the cells after every mutation and is
/// never set directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    /// Cells in row-major order (0-8).
    pub(crate) cells: [Cell; 9],
    pub(crate) status: SubBoardStatus,
}

impl SubBoard {
    /// Creates an empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current status.
    pub fn status(&self) -> SubBoardStatus {
        self.status
    }

    /// Returns true while the sub-board accepts moves.
    pub fn is_open(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the marks of all cells in row-major order.
    pub fn marks(&self) -> MarkGrid {
        self.cells.map(|cell| cell.mark())
    }

    /// Places a mark at the given row and column.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::OutOfBounds`] if `row` or `col` is not in `0..3`.
    /// - [`InvalidMove::BoardClosed`] if the sub-board is not in progress.
    /// - [`InvalidMove::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn place(&mut self, row: usize, col: usize, mark: Player) -> Result<SubBoardStatus, InvalidMove> {
        let pos = Position::from_row_col(row, col).ok_or(InvalidMove::OutOfBounds { row, col })?;
        self.place_at(pos, mark)
    }

    /// Places a mark at the given position and returns the new status.
    ///
    /// # Errors
    ///
    /// Same as [`SubBoard::place`], minus the bounds check.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn place_at(&mut self, pos: Position, mark: Player) -> Result<SubBoardStatus, InvalidMove> {
        if !self.is_open() {
            return Err(InvalidMove::BoardClosed);
        }

        self.cells[pos.to_index()].set(mark)?;
        self.status = self.evaluate_status();

        debug!(status = ?self.status, "Sub-board updated");
        Ok(self.status)
    }

    /// Computes the status from the cells.
    ///
    /// Rows, then columns, then diagonals; the first line of three equal
    /// marks wins. A full grid with no line is a draw.
    #[instrument(skip(self), level = "trace")]
    pub fn evaluate_status(&self) -> SubBoardStatus {
        let marks = self.marks();
        if let Some(winner) = rules::check_winner(&marks) {
            SubBoardStatus::Won(winner)
        } else if rules::is_full(&marks) {
            SubBoardStatus::Drawn
        } else {
            SubBoardStatus::InProgress
        }
    }

    /// Clears every cell and reopens the sub-board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        self.status = SubBoardStatus::InProgress;
    }
}

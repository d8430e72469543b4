//! First-class action types for inception tic-tac-toe.
//!
//! Moves are domain events, not side effects. A [`Move`] is only recorded
//! once the meta-board has accepted it.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark in one cell of one sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board within the meta-board.
    pub board: Position,
    /// The cell within the sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument(level = "trace")]
    pub fn new(player: Player, board: Position, cell: Position) -> Self {
        Self {
            player,
            board,
            cell,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} / {}",
            self.player,
            self.board.label(),
            self.cell.label()
        )
    }
}

/// Rejected play.
///
/// Callers driving the game from user input treat this as a no-op: the
/// attempted play is discarded and the board is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// A row or column index is outside `0..3`.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,

    /// The target sub-board has already been won.
    #[display("Board is already decided")]
    BoardClosed,

    /// The meta-board has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// A replayed move names the wrong player.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),
}

//! Core domain types for inception tic-tac-toe.

use crate::action::InvalidMove;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (player A, goes first).
    X,
    /// Player O (player B, goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A single playable square.
///
/// An empty cell holds no mark. A cell is set at most once per round and is
/// only cleared when its sub-board is reset after a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    mark: Option<Player>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(&self) -> Option<Player> {
        self.mark
    }

    /// Checks if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }

    /// Places a mark in the cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::CellOccupied`] if the cell already holds a mark.
    /// The caller is responsible for rejecting moves on decided boards.
    #[instrument(level = "trace")]
    pub(crate) fn set(&mut self, mark: Player) -> Result<(), InvalidMove> {
        if self.mark.is_some() {
            return Err(InvalidMove::CellOccupied);
        }
        self.mark = Some(mark);
        Ok(())
    }

    /// Empties the cell.
    pub(crate) fn clear(&mut self) {
        self.mark = None;
    }
}

/// Outcome of a single sub-board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubBoardStatus {
    /// Still accepting moves.
    #[default]
    InProgress,
    /// Three in a line for this player.
    Won(Player),
    /// All nine cells filled with no line.
    Drawn,
}

impl SubBoardStatus {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            SubBoardStatus::Won(player) => Some(player),
            SubBoardStatus::InProgress | SubBoardStatus::Drawn => None,
        }
    }

    /// Returns true while the sub-board accepts moves.
    pub fn is_in_progress(self) -> bool {
        matches!(self, SubBoardStatus::InProgress)
    }
}

/// Overall status of the meta-board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Three sub-boards in a line were won by this player.
    Won(Player),
    /// Every sub-board was won and no line of three exists.
    Drawn,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_decided(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

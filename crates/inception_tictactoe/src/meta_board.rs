//! The 3x3 grid of sub-boards and the turn state machine.

use crate::action::{InvalidMove, Move};
use crate::invariants::{InvariantSet, PlayInvariants};
use crate::rules::{self, MarkGrid};
use crate::sub_board::SubBoard;
use crate::types::{GameStatus, Player, SubBoardStatus};
use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Inception tic-tac-toe: nine sub-boards, one turn, one overall status.
///
/// The overall status is derived from the sub-board statuses. A sub-board
/// that ends in a draw is cleared and reopened immediately after the move,
/// so it never contributes a mark to a meta-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBoard {
    /// Sub-boards in row-major order (0-8).
    pub(crate) boards: [SubBoard; 9],
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl MetaBoard {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: Default::default(),
            turn: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Discards the current game and starts over.
    #[instrument(skip(self), fields(moves = self.history.len(), status = ?self.status))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Rebuilds a game from a move history.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMove`] encountered, including
    /// [`InvalidMove::WrongPlayer`] when a move's player does not match the
    /// turn.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, InvalidMove> {
        let mut game = Self::new();
        for mov in moves {
            if mov.player != game.turn && !game.status.is_decided() {
                warn!(%mov, turn = %game.turn, "Replayed move out of turn");
                return Err(InvalidMove::WrongPlayer(mov.player));
            }
            game.play(mov.board, mov.cell)?;
        }
        Ok(game)
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the overall status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Gets the sub-board at the given position.
    pub fn board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Gets the sub-board at the given meta row and column.
    pub fn board_at(&self, row: usize, col: usize) -> Option<&SubBoard> {
        Position::from_row_col(row, col).map(|pos| self.board(pos))
    }

    /// Returns all sub-boards in row-major order.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Returns the statuses of all sub-boards in row-major order.
    pub fn board_statuses(&self) -> [SubBoardStatus; 9] {
        self.boards.each_ref().map(SubBoard::status)
    }

    /// Positions of the sub-boards that currently accept moves.
    ///
    /// Empty once the game is decided.
    pub fn open_boards(&self) -> Vec<Position> {
        if self.status.is_decided() {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.board(*pos).is_open())
            .collect()
    }

    /// Returns true iff [`MetaBoard::play`] would accept this move.
    pub fn is_playable(&self, board: Position, cell: Position) -> bool {
        !self.status.is_decided()
            && self.board(board).is_open()
            && self.board(board).cell(cell).is_empty()
    }

    /// Plays the current player's mark at the given coordinates.
    ///
    /// `meta_row`/`meta_col` select the sub-board and `sub_row`/`sub_col`
    /// select the cell within it.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidMove`] and leaves the game untouched if the game is
    /// over, an index is outside `0..3`, the sub-board is decided, or the
    /// cell is occupied.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play_at(
        &mut self,
        meta_row: usize,
        meta_col: usize,
        sub_row: usize,
        sub_col: usize,
    ) -> Result<(), InvalidMove> {
        if self.status.is_decided() {
            return Err(InvalidMove::GameOver);
        }
        let board = Position::from_row_col(meta_row, meta_col).ok_or(InvalidMove::OutOfBounds {
            row: meta_row,
            col: meta_col,
        })?;
        let cell = Position::from_row_col(sub_row, sub_col).ok_or(InvalidMove::OutOfBounds {
            row: sub_row,
            col: sub_col,
        })?;
        self.play(board, cell)
    }

    /// Plays the current player's mark in `cell` of sub-board `board`.
    ///
    /// # Errors
    ///
    /// See [`MetaBoard::play_at`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, board: Position, cell: Position) -> Result<(), InvalidMove> {
        if self.status.is_decided() {
            return Err(InvalidMove::GameOver);
        }

        let player = self.turn;
        let sub_status = self.boards[board.to_index()].place_at(cell, player)?;
        self.history.push(Move::new(player, board, cell));

        // Meta status is taken from the statuses as they stand after the
        // move, before a drawn sub-board is cleared.
        self.status = Self::evaluate_statuses(self.board_statuses());

        if sub_status == SubBoardStatus::Drawn {
            debug!(%board, "Sub-board drawn, clearing it for further play");
            self.boards[board.to_index()].reset();
        }

        match self.status {
            GameStatus::InProgress => self.turn = player.opponent(),
            decided => info!(status = %decided, moves = self.history.len(), "Game decided"),
        }

        debug_assert!(
            PlayInvariants::check_all(self).is_ok(),
            "invariants violated after {:?}",
            self.last_move()
        );

        Ok(())
    }

    /// Computes the overall status from the sub-board statuses.
    ///
    /// Uses the same line order as a single sub-board. Only won sub-boards
    /// contribute a mark; in-progress and drawn sub-boards count as empty.
    #[instrument(skip(self), level = "trace")]
    pub fn evaluate_overall_status(&self) -> GameStatus {
        Self::evaluate_statuses(self.board_statuses())
    }

    fn evaluate_statuses(statuses: [SubBoardStatus; 9]) -> GameStatus {
        let winners: MarkGrid = statuses.map(SubBoardStatus::winner);
        if let Some(winner) = rules::check_winner(&winners) {
            GameStatus::Won(winner)
        } else if rules::is_full(&winners) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Formats the meta-board as a human-readable grid.
    ///
    /// Marks are `X` and `O`, empty cells `.`; sub-boards are separated by
    /// `|` and `-` rules.
    pub fn display(&self) -> String {
        let mut lines = Vec::with_capacity(11);
        for meta_row in 0..3 {
            if meta_row > 0 {
                lines.push("------+-------+------".to_string());
            }
            for sub_row in 0..3 {
                let row = (0..3)
                    .map(|meta_col| {
                        let board = &self.boards[meta_row * 3 + meta_col];
                        (0..3)
                            .map(|sub_col| {
                                board.cells()[sub_row * 3 + sub_col]
                                    .mark()
                                    .map_or('.', Player::symbol)
                                    .to_string()
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect::<Vec<_>>()
                    .join(" | ");
                lines.push(row);
            }
        }
        lines.join("\n")
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}

//! Application state and input handling.

use super::input::move_cursor;
use super::layout::{CellRef, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use inception_tictactoe::{GameStatus, MetaBoard};
use tracing::{debug, info, instrument};

const NEW_GAME_MESSAGE: &str = "New game. Player X's turn.";

/// Main application state.
///
/// Holds the game and the transient interaction state around it. The
/// renderer only reads from here; all mutation goes through the handlers.
#[derive(Debug, Clone)]
pub struct App {
    game: MetaBoard,
    hover: Option<CellRef>,
    pressed: Option<CellRef>,
    cursor: CellRef,
    hover_highlight: bool,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(hover_highlight: bool) -> Self {
        Self {
            game: MetaBoard::new(),
            hover: None,
            pressed: None,
            cursor: CellRef::default(),
            hover_highlight,
            status_message: NEW_GAME_MESSAGE.to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &MetaBoard {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> CellRef {
        self.cursor
    }

    /// Gets the cell under the mouse, if any.
    pub fn hover(&self) -> Option<CellRef> {
        self.hover
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The cell to draw with the hover highlight.
    ///
    /// Only playable cells are highlighted.
    pub fn highlighted(&self) -> Option<CellRef> {
        self.hover
            .filter(|_| self.hover_highlight)
            .filter(|cell| self.game.is_playable(cell.board, cell.cell))
    }

    /// Handles a key press.
    ///
    /// Playing needs the board on screen; while `layout` does not fit only
    /// quitting and restarting work.
    #[instrument(skip(self, layout), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent, layout: &ScreenLayout) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') if layout.fits() => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event against the layout of the last drawn frame.
    ///
    /// A move is played when the left button is pressed and released over
    /// the same cell.
    #[instrument(skip(self, layout), fields(kind = ?mouse.kind, column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        let target = layout.hit_test(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.hover = target;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.game.status().is_decided()
                    && layout.on_reset_button(mouse.column, mouse.row)
                {
                    self.restart();
                    return;
                }
                self.hover = target;
                self.pressed = target;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take();
                if let Some(cell) = target.filter(|cell| pressed == Some(*cell)) {
                    self.cursor = cell;
                    self.play(cell);
                }
            }
            _ => {}
        }
    }

    /// Plays the current player's mark in `cell`.
    ///
    /// Rejected moves leave the game untouched and only update the status
    /// message.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: CellRef) {
        let player = self.game.turn();
        let (meta_row, meta_col, sub_row, sub_col) = cell.indices();

        match self.game.play_at(meta_row, meta_col, sub_row, sub_col) {
            Ok(()) => {
                debug!(%player, board = %cell.board, cell = %cell.cell, "Move applied");
                self.status_message = match self.game.status() {
                    GameStatus::InProgress => format!(
                        "{} played {} / {}. Player {}'s turn.",
                        player,
                        cell.board,
                        cell.cell,
                        self.game.turn()
                    ),
                    decided => format!("{}! Press 'r' or click Reset to play again.", decided),
                };
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = format!("Invalid move: {}", e);
            }
        }
    }

    /// Discards the current game and starts a new one.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.new_game();
        self.pressed = None;
        self.status_message = NEW_GAME_MESSAGE.to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

//! Inception tic-tac-toe game logic.
//!
//! A 3x3 grid of ordinary tic-tac-toe boards. Winning three sub-boards in a
//! line wins the game. A sub-board that fills up without a winner is cleared
//! and played again.
//!
//! # Architecture
//!
//! - [`Cell`]: a square holding at most one mark
//! - [`SubBoard`]: nine cells with a derived [`SubBoardStatus`]
//! - [`MetaBoard`]: nine sub-boards, the turn, and the overall [`GameStatus`]
//! - [`rules`]: line and fullness checks shared by both levels
//! - [`invariants`]: properties that hold between moves
//!
//! This crate holds no rendering or input state. Front ends resolve user
//! input to grid coordinates and call [`MetaBoard::play_at`].
//!
//! # Example
//!
//! ```
//! use inception_tictactoe::{GameStatus, InvalidMove, MetaBoard, Player};
//!
//! let mut game = MetaBoard::new();
//! game.play_at(1, 1, 0, 0)?;
//! assert_eq!(game.turn(), Player::O);
//! assert_eq!(game.play_at(1, 1, 0, 0), Err(InvalidMove::CellOccupied));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod meta_board;
mod position;
pub mod rules;
mod sub_board;
mod types;

pub use action::{InvalidMove, Move};
pub use meta_board::MetaBoard;
pub use position::Position;
pub use sub_board::SubBoard;
pub use types::{Cell, GameStatus, Player, SubBoardStatus};

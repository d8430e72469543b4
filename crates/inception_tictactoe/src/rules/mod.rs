//! Game rules for tic-tac-toe grids.
//!
//! Pure functions over a 3x3 grid of optional marks. Sub-boards run them on
//! their cells and the meta-board runs them on sub-board winners, so the
//! same line order applies at both levels.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::Player;

/// A 3x3 grid of optional marks in row-major order.
pub type MarkGrid = [Option<Player>; 9];

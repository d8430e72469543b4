//! History invariant: the move log reproduces the current game.

use super::Invariant;
use crate::MetaBoard;

/// Invariant: replaying the history yields an identical game.
///
/// Catches any mutation of cells, turn or status that bypassed a recorded
/// move.
pub struct HistoryConsistentInvariant;

impl Invariant<MetaBoard> for HistoryConsistentInvariant {
    fn holds(game: &MetaBoard) -> bool {
        MetaBoard::replay(game.history()).is_ok_and(|replayed| replayed == *game)
    }

    fn description() -> &'static str {
        "Move history reproduces the game"
    }
}

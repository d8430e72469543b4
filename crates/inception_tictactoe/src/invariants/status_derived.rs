//! Status invariant: stored statuses always match a fresh evaluation.

use super::Invariant;
use crate::MetaBoard;

/// Invariant: every status is derived, never set by hand.
///
/// Each sub-board's status equals the evaluation of its cells, and the
/// overall status equals the evaluation of the sub-board statuses.
pub struct StatusDerivedInvariant;

impl Invariant<MetaBoard> for StatusDerivedInvariant {
    fn holds(game: &MetaBoard) -> bool {
        game.boards()
            .iter()
            .all(|board| board.status() == board.evaluate_status())
            && game.status() == game.evaluate_overall_status()
    }

    fn description() -> &'static str {
        "Board statuses are derived from their contents"
    }
}

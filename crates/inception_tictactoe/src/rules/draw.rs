//! Draw detection over a 3x3 grid of marks.

use super::MarkGrid;
use tracing::instrument;

/// Checks if every square of the grid holds a mark.
///
/// A full grid with no winner is a draw.
#[instrument(level = "trace")]
pub fn is_full(grid: &MarkGrid) -> bool {
    grid.iter().all(Option::is_some)
}

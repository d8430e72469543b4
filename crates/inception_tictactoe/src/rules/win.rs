//! Win detection over a 3x3 grid of marks.

use super::MarkGrid;
use crate::{Player, Position};
use tracing::instrument;

/// The eight winning lines, in check order.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the grid.
///
/// Returns `Some(player)` for the first line (in [`LINES`] order) holding
/// three equal marks, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(grid: &MarkGrid) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let first = grid[a.to_index()]?;
        (grid[b.to_index()] == Some(first) && grid[c.to_index()] == Some(first)).then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(marks: &[(Position, Player)]) -> MarkGrid {
        let mut grid = [None; 9];
        for (pos, player) in marks {
            grid[pos.to_index()] = Some(*player);
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&[None; 9]), None);
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let grid = grid_with(&line.map(|pos| (pos, player)));
                assert_eq!(check_winner(&grid), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = grid_with(&[(Position::TopLeft, Player::X), (Position::Center, Player::X)]);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row O and bottom row X: rows are scanned top to bottom.
        let grid = grid_with(&[
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(check_winner(&grid), Some(Player::O));
    }
}

//! Cursor movement for keyboard navigation.

use super::layout::CellRef;
use crossterm::event::KeyCode;
use inception_tictactoe::Position;

/// Moves the cursor one cell on the 9x9 grid.
///
/// Crosses into the neighbouring sub-board at an inner edge and stays put at
/// the outer edge. Keys other than the arrows leave the cursor unchanged.
pub fn move_cursor(cursor: CellRef, key: KeyCode) -> CellRef {
    let (d_row, d_col) = match key {
        KeyCode::Up => (-1, 0),
        KeyCode::Down => (1, 0),
        KeyCode::Left => (0, -1),
        KeyCode::Right => (0, 1),
        _ => return cursor,
    };

    match cursor.cell.offset(d_row, d_col) {
        Some(cell) => CellRef::new(cursor.board, cell),
        None => cursor
            .board
            .offset(d_row, d_col)
            .and_then(|board| {
                // Enter the neighbouring sub-board on its facing edge.
                let row = (cursor.cell.row() as isize + d_row).rem_euclid(3) as usize;
                let col = (cursor.cell.col() as isize + d_col).rem_euclid(3) as usize;
                Position::from_row_col(row, col).map(|cell| CellRef::new(board, cell))
            })
            .unwrap_or(cursor),
    }
}

//! Screen geometry and hit-testing.
//!
//! Everything here is pure arithmetic on terminal cells. The game core never
//! sees these coordinates; the event loop resolves a mouse position to a
//! [`CellRef`] and hands the indices to the board.

use inception_tictactoe::Position;
use ratatui::layout::Rect;
use tracing::instrument;

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 3;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 1;
/// Grid line between cells of a sub-board.
pub const CELL_GAP: u16 = 1;
/// Horizontal space between sub-boards.
pub const BOARD_GAP_X: u16 = 3;
/// Vertical space between sub-boards.
pub const BOARD_GAP_Y: u16 = 1;

/// Width of a sub-board.
pub const SUB_WIDTH: u16 = 3 * CELL_WIDTH + 2 * CELL_GAP;
/// Height of a sub-board.
pub const SUB_HEIGHT: u16 = 3 * CELL_HEIGHT + 2 * CELL_GAP;
/// Width of the whole meta-board.
pub const META_WIDTH: u16 = 3 * SUB_WIDTH + 2 * BOARD_GAP_X;
/// Height of the whole meta-board.
pub const META_HEIGHT: u16 = 3 * SUB_HEIGHT + 2 * BOARD_GAP_Y;

/// Height of the turn/winner banner.
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the status line.
pub const STATUS_HEIGHT: u16 = 3;
/// Width of the reset button.
pub const RESET_WIDTH: u16 = 11;

/// A single cell of the meta-board: which sub-board, which cell in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Sub-board within the meta-board.
    pub board: Position,
    /// Cell within the sub-board.
    pub cell: Position,
}

impl CellRef {
    /// Creates a cell reference.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Indices in the order the board takes them:
    /// `(meta_row, meta_col, sub_row, sub_col)`.
    pub fn indices(self) -> (usize, usize, usize, usize) {
        (
            self.board.row(),
            self.board.col(),
            self.cell.row(),
            self.cell.col(),
        )
    }
}

impl Default for CellRef {
    fn default() -> Self {
        Self::new(Position::Center, Position::Center)
    }
}

/// Returns true if the terminal cell lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && u32::from(column) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

/// Placement of the meta-board on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    area: Rect,
}

impl BoardLayout {
    /// Centres the board in `area`.
    ///
    /// If `area` is smaller than the board the board is anchored at its
    /// top-left corner.
    pub fn new(area: Rect) -> Self {
        let x = area.x + area.width.saturating_sub(META_WIDTH) / 2;
        let y = area.y + area.height.saturating_sub(META_HEIGHT) / 2;
        Self {
            area: Rect::new(x, y, META_WIDTH, META_HEIGHT),
        }
    }

    /// Screen area of the whole board.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen area of one sub-board.
    pub fn board_rect(&self, board: Position) -> Rect {
        Rect::new(
            self.area.x + board.col() as u16 * (SUB_WIDTH + BOARD_GAP_X),
            self.area.y + board.row() as u16 * (SUB_HEIGHT + BOARD_GAP_Y),
            SUB_WIDTH,
            SUB_HEIGHT,
        )
    }

    /// Screen area of one cell.
    pub fn cell_rect(&self, cell: CellRef) -> Rect {
        let board = self.board_rect(cell.board);
        Rect::new(
            board.x + cell.cell.col() as u16 * (CELL_WIDTH + CELL_GAP),
            board.y + cell.cell.row() as u16 * (CELL_HEIGHT + CELL_GAP),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Maps a terminal position to the cell drawn there.
    ///
    /// Returns `None` for grid lines, the gaps between sub-boards and
    /// anything outside the board.
    #[instrument(level = "trace", skip(self))]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CellRef> {
        let dx = column.checked_sub(self.area.x)?;
        let dy = row.checked_sub(self.area.y)?;
        let (board_col, cell_col) = split_axis(dx, SUB_WIDTH, BOARD_GAP_X, CELL_WIDTH)?;
        let (board_row, cell_row) = split_axis(dy, SUB_HEIGHT, BOARD_GAP_Y, CELL_HEIGHT)?;
        Some(CellRef::new(
            Position::from_row_col(board_row, board_col)?,
            Position::from_row_col(cell_row, cell_col)?,
        ))
    }
}

/// Splits an offset along one axis into (sub-board index, cell index).
fn split_axis(offset: u16, sub_len: u16, board_gap: u16, cell_len: u16) -> Option<(usize, usize)> {
    let board_stride = sub_len + board_gap;
    let board = offset / board_stride;
    let within = offset % board_stride;
    if board >= 3 || within >= sub_len {
        return None;
    }
    let cell_stride = cell_len + CELL_GAP;
    if within % cell_stride >= cell_len {
        return None;
    }
    Some((board as usize, (within / cell_stride) as usize))
}

/// Placement of everything on screen for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Whole terminal area.
    pub area: Rect,
    /// Turn/winner banner.
    pub header: Rect,
    /// Reset button, at the right end of the banner.
    pub reset_button: Rect,
    /// The meta-board.
    pub board: BoardLayout,
    /// Status and help line.
    pub status: Rect,
}

impl ScreenLayout {
    /// Lays out a frame of the given size.
    pub fn new(area: Rect) -> Self {
        let header_height = HEADER_HEIGHT.min(area.height);
        let status_height = STATUS_HEIGHT.min(area.height - header_height);
        let header = Rect::new(area.x, area.y, area.width, header_height);
        let status = Rect::new(
            area.x,
            area.y + area.height - status_height,
            area.width,
            status_height,
        );
        let middle = Rect::new(
            area.x,
            header.y + header_height,
            area.width,
            area.height - header_height - status_height,
        );
        let reset_width = RESET_WIDTH.min(area.width);
        let reset_button = Rect::new(
            area.x + area.width - reset_width,
            header.y,
            reset_width,
            header_height,
        );

        Self {
            area,
            header,
            reset_button,
            board: BoardLayout::new(middle),
            status,
        }
    }

    /// Returns true if the board fits between the banner and status line.
    pub fn fits(&self) -> bool {
        let board = self.board.area();
        self.area.width >= board.width
            && self.area.height >= HEADER_HEIGHT + board.height + STATUS_HEIGHT
    }

    /// Maps a terminal position to a drawn cell.
    ///
    /// Always `None` while the board does not fit, since it is not drawn.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CellRef> {
        if !self.fits() {
            return None;
        }
        self.board.hit_test(column, row)
    }

    /// Returns true if the terminal position is on a drawn reset button.
    pub fn on_reset_button(&self, column: u16, row: u16) -> bool {
        self.fits() && contains(self.reset_button, column, row)
    }
}

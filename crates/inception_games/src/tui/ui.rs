//! Stateless UI rendering for the meta-board.

use super::app::App;
use super::layout::{
    CellRef, ScreenLayout, CELL_GAP, CELL_HEIGHT, CELL_WIDTH, HEADER_HEIGHT, META_HEIGHT,
    META_WIDTH, STATUS_HEIGHT, SUB_HEIGHT,
};
use super::theme::Theme;
use inception_tictactoe::{GameStatus, Position, SubBoardStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

const TITLE: &str = " Inception Tic-Tac-Toe ";
const HELP: &str = " click or arrows + enter: play | r: new game | q: quit ";

/// Renders one frame.
///
/// `layout` must be the layout of `frame.area()`; the event loop hit-tests
/// mouse input against the same value.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout, theme: &Theme) {
    if !layout.fits() {
        draw_too_small(frame, layout.area);
        return;
    }

    draw_header(frame, app, layout, theme);
    for board in Position::iter() {
        draw_sub_board(frame, app, layout, theme, board);
    }
    draw_status(frame, app, layout.status, theme);
}

fn draw_header(frame: &mut Frame, app: &App, layout: &ScreenLayout, theme: &Theme) {
    let game = app.game();
    let banner = match game.status() {
        GameStatus::InProgress => Line::from(vec![
            Span::raw("Turn: "),
            Span::styled(game.turn().symbol().to_string(), theme.mark_style(game.turn())),
        ]),
        GameStatus::Won(winner) => Line::from(vec![
            Span::styled("Winner! ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(winner.symbol().to_string(), theme.mark_style(winner)),
        ]),
        GameStatus::Drawn => Line::from(Span::styled(
            "Draw!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    };

    let header = Paragraph::new(banner)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(TITLE));
    frame.render_widget(header, layout.header);

    if game.status().is_decided() {
        let button = Paragraph::new("Reset")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, layout.reset_button);
    }
}

fn draw_sub_board(frame: &mut Frame, app: &App, layout: &ScreenLayout, theme: &Theme, board: Position) {
    let grid_color = match app.game().board(board).status() {
        SubBoardStatus::Won(winner) => theme.mark_color(winner),
        _ => theme.grid,
    };
    let grid = Paragraph::new(grid_lines()).style(Style::default().fg(grid_color));
    frame.render_widget(grid, layout.board.board_rect(board));

    for cell in Position::iter() {
        draw_cell(frame, app, layout, theme, CellRef::new(board, cell));
    }
}

/// Grid lines of one sub-board, sized from the layout constants.
fn grid_lines() -> Vec<Line<'static>> {
    let cells = vec![" ".repeat(CELL_WIDTH as usize); 3].join("│".repeat(CELL_GAP as usize).as_str());
    let rule = vec!["─".repeat(CELL_WIDTH as usize); 3].join("┼".repeat(CELL_GAP as usize).as_str());
    (0..SUB_HEIGHT)
        .map(|row| {
            if row % (CELL_HEIGHT + CELL_GAP) < CELL_HEIGHT {
                Line::from(cells.clone())
            } else {
                Line::from(rule.clone())
            }
        })
        .collect()
}

fn draw_cell(frame: &mut Frame, app: &App, layout: &ScreenLayout, theme: &Theme, target: CellRef) {
    let game = app.game();
    let sub_board = game.board(target.board);

    let (mut symbol, mut style) = match sub_board.cell(target.cell).mark() {
        Some(player) => (format!(" {} ", player.symbol()), theme.mark_style(player)),
        None => ("   ".to_string(), Style::default().fg(theme.grid)),
    };

    // Won sub-boards are dimmed with the winner's mark in the middle.
    if let SubBoardStatus::Won(winner) = sub_board.status() {
        style = style.add_modifier(Modifier::DIM);
        if target.cell == Position::Center {
            symbol = format!(" {} ", winner.symbol());
            style = Style::default()
                .fg(Color::Black)
                .bg(theme.mark_color(winner))
                .add_modifier(Modifier::BOLD);
        }
    }

    if game
        .last_move()
        .is_some_and(|mov| mov.board == target.board && mov.cell == target.cell)
    {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if app.highlighted() == Some(target) {
        style = style.bg(theme.highlight).fg(Color::Black);
    }
    if app.cursor() == target && !game.status().is_decided() {
        style = style.bg(theme.cursor).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)));
    frame.render_widget(paragraph, layout.board.cell_rect(target));
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.grid))
                .title(HELP),
        );
    frame.render_widget(status, area);
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small: need {}x{}",
        META_WIDTH,
        HEADER_HEIGHT + META_HEIGHT + STATUS_HEIGHT
    );
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), area);
}

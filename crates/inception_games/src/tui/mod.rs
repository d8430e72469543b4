//! Terminal UI for inception tic-tac-toe.

pub mod app;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::Settings;
use crate::logging;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use app::App;
use layout::ScreenLayout;
use theme::Theme;

/// Runs the terminal UI until the user quits.
///
/// # Errors
///
/// Returns an error if logging, the theme or the terminal cannot be set up,
/// or if drawing or reading events fails.
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    logging::init_file(settings)?;
    info!("Starting Inception Tic-Tac-Toe TUI");

    let theme = Theme::try_from(settings.theme())?;
    let tick_rate = Duration::from_millis(*settings.tick_rate_ms());
    let mut app = App::new(*settings.hover_highlight());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &theme, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len(), "TUI exited");
    res
}

/// Draw/poll loop.
#[instrument(skip_all, fields(tick_ms = tick_rate.as_millis() as u64))]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    theme: &Theme,
    tick_rate: Duration,
) -> Result<()> {
    let mut layout = ScreenLayout::new(Rect::default());

    loop {
        terminal.draw(|frame| {
            layout = ScreenLayout::new(frame.area());
            ui::draw(frame, app, &layout, theme);
        })?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, &layout),
                Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
                Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

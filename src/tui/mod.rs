//! Terminal host for the time-travel game.
//!
//! A single-threaded loop: draw the current state, block on the next
//! terminal event, hand it to [`App`], repeat.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, Flow, Focus};
pub use input::{Direction, Intent, intent_for, move_cursor};
pub use layout::{Hit, ScreenLayout};
pub use ui::{class_style, draw};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the game in the terminal until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!(mouse = config.ui().mouse(), "Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if *config.ui().mouse() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.ui().show_help());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    if *config.ui().mouse() {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().move_count(), "Terminal UI closed");
    res
}

/// Event loop over any backend.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut layout = ScreenLayout::default();
    loop {
        terminal.draw(|f| {
            layout = ScreenLayout::new(f.area(), app.show_help());
            draw(f, app, &layout);
        })?;

        let flow = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
            _ => Flow::Continue,
        };

        if flow == Flow::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}

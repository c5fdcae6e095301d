//! Terminal UI for noughts.

mod app;
mod input;
mod reveal;
mod ui;

pub use app::{App, IDLE_FRAME};
pub use input::{Action, Direction, action_for_key, action_for_mouse, move_cursor};
pub use reveal::Reveal;
pub use ui::{draw, square_at};

use crate::config::Config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including on error paths.
struct TerminalGuard {
    terminal: Term,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Sends tracing output to the configured log file so it stays off the screen.
fn init_file_tracing(config: &Config) -> Result<()> {
    let path = config.logging().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.logging().filter())
            }),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game until the user quits.
pub async fn run_tui(config: Config) -> Result<()> {
    init_file_tracing(&config)?;
    info!("Starting noughts TUI");
    debug!(?config, "Configuration in effect");

    let mut app = App::new(config.display().clone(), config.animation().clone());
    let mut guard = TerminalGuard::new()?;

    let res = run_loop(guard.terminal_mut(), &mut app).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, app);
        })?;

        while event::poll(Duration::ZERO)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    action_for_key(key.code, app.modal_open())
                }
                Event::Mouse(mouse) => action_for_mouse(
                    mouse,
                    square_at(area, mouse.column, mouse.row),
                    app.modal_open(),
                ),
                _ => None,
            };
            if let Some(action) = action {
                debug!(?action, "Handling input");
                app.handle_action(action, Instant::now());
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        tokio::time::sleep(app.frame_interval(Instant::now())).await;
    }
}

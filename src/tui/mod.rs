//! Terminal User Interface (TUI) for pomo.
//!
//! Hosts the countdown: draws it, feeds it one tick per second while it
//! runs, and forwards settings changes from the settings form.
//! Built with ratatui and crossterm.

mod app;
mod event;
pub mod settings;
pub mod ticker;
mod ui;

pub use app::{App, DisplayBuffer};
pub use event::Action;

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::error::PomoError;
use crate::timer::CountdownController;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(controller: CountdownController, bell: bool) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    info!(
        mode = %controller.mode(),
        remaining = controller.remaining_seconds(),
        "tui started"
    );

    // Create app state and run main loop
    let mut app = App::new(controller, bell);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(ref e) = result {
        warn!(error = %e, "tui exited with an error");
    } else {
        info!("tui closed");
    }

    result
}

/// Run the main application loop.
fn run_app<B: Backend + Write>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        if app.take_bell() {
            ring_bell(terminal.backend_mut())?;
        }

        // Handle events
        let timeout = app.poll_timeout(Instant::now());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                Action::Quit => app.close(),
                Action::StartStop => app.start_stop(Instant::now()),
                Action::SelectMode(mode) => app.select_mode(mode),
                Action::Reset => app.reset(),
                Action::OpenSettings => app.open_settings(),
            }
        }

        app.apply_pending_settings();
        app.on_tick(Instant::now());
    }

    Ok(())
}

/// Write the terminal bell character.
fn ring_bell<W: Write>(out: &mut W) -> Result<(), PomoError> {
    out.write_all(b"\x07")?;
    out.flush()?;
    Ok(())
}

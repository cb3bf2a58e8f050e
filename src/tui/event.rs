//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::timer::Mode;
use crate::tui::app::App;
use crate::tui::settings::TICK_INTERVAL;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle the countdown.
    StartStop,
    /// Switch to a mode.
    SelectMode(Mode),
    /// Reload the current mode's duration.
    Reset,
    /// Show the settings form.
    OpenSettings,
}

/// Handle terminal events.
///
/// Waits at most `timeout` for input. Returns an action to take, or None if
/// no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails or a settings change cannot be
/// delivered.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, PomoError> {
    if event::poll(timeout).map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return handle_key(app, key);
            }
        }
    }

    Ok(None)
}

/// Map a key press to an action.
///
/// While the settings form is visible every key goes to the form.
///
/// # Errors
///
/// Returns an error if applying the settings form fails.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<Option<Action>, PomoError> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    if app.settings_visible() {
        handle_settings_key(app, key)?;
        return Ok(None);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 's') | KeyCode::Enter => Some(Action::StartStop),
        KeyCode::Char('w') => Some(Action::SelectMode(Mode::Work)),
        KeyCode::Char('b') => Some(Action::SelectMode(Mode::Break)),
        KeyCode::Tab => Some(Action::SelectMode(app.controller.mode().other())),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('o' | ',') => Some(Action::OpenSettings),
        KeyCode::Char('?') => {
            app.show_help();
            None
        }
        _ => None,
    };

    Ok(action)
}

fn handle_settings_key(app: &mut App, key: KeyEvent) -> Result<(), PomoError> {
    let Some(form) = app.settings_mut() else {
        return Ok(());
    };

    let step = i64::from(TICK_INTERVAL);
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('j' | 'k') => {
            form.focus_next();
        }
        KeyCode::Left | KeyCode::Char('h' | '-') => form.focused_slider_mut().adjust(-1),
        KeyCode::Right | KeyCode::Char('l' | '+') => form.focused_slider_mut().adjust(1),
        KeyCode::PageDown => form.focused_slider_mut().adjust(-step),
        KeyCode::PageUp => form.focused_slider_mut().adjust(step),
        KeyCode::Home => form.focused_slider_mut().to_min(),
        KeyCode::End => form.focused_slider_mut().to_max(),
        KeyCode::Enter => {
            form.apply()?;
        }
        KeyCode::Esc | KeyCode::Char('q') => form.close(),
        _ => {}
    }

    Ok(())
}

//! Application state for the TUI.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::info;

use crate::timer::{CountdownController, Display, Mode, TickOutcome};
use crate::tui::settings::{DurationChange, SettingsForm};
use crate::tui::ticker::Ticker;

/// Longest the event loop waits for input before checking the ticker.
pub const MAX_POLL: Duration = Duration::from_millis(100);

/// What the main view shows; updated by the countdown.
#[derive(Debug, Clone, Default)]
pub struct DisplayBuffer {
    /// Remaining time as MM:SS.
    pub text: String,
    /// Whether the countdown is ticking.
    pub running: bool,
    /// Most recent completed countdown and when it finished.
    pub last_completed: Option<(Mode, DateTime<Local>)>,
    /// A completion happened and the bell has not been rung yet.
    pub bell_pending: bool,
}

impl Display for DisplayBuffer {
    fn show(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn running_changed(&mut self, running: bool) {
        self.running = running;
    }

    fn completed(&mut self, mode: Mode) {
        self.last_completed = Some((mode, Local::now()));
        self.bell_pending = true;
    }
}

/// Application state.
pub struct App {
    /// The countdown.
    pub controller: CountdownController,
    /// Last values pushed by the countdown.
    pub display: DisplayBuffer,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Ring the terminal bell on completion.
    bell: bool,
    /// Created on first use.
    settings: Option<SettingsForm>,
    settings_tx: Sender<DurationChange>,
    settings_rx: Receiver<DurationChange>,
    ticker: Ticker,
}

impl App {
    /// Create a new app around a stopped controller.
    #[must_use]
    pub fn new(controller: CountdownController, bell: bool) -> Self {
        let (settings_tx, settings_rx) = mpsc::channel();
        let display = DisplayBuffer {
            text: controller.format_remaining(),
            running: controller.is_running(),
            ..DisplayBuffer::default()
        };

        Self {
            controller,
            display,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
            bell,
            settings: None,
            settings_tx,
            settings_rx,
            ticker: Ticker::default(),
        }
    }

    /// Start or stop the countdown, arming the ticker to match.
    pub fn start_stop(&mut self, now: Instant) {
        if self.controller.start_stop(&mut self.display) {
            self.ticker.start(now);
        } else {
            self.ticker.stop();
        }
        self.status = None;
    }

    /// Switch to `mode`.
    pub fn select_mode(&mut self, mode: Mode) {
        self.controller.select_mode(mode, &mut self.display);
        self.ticker.stop();
        self.status = None;
    }

    /// Reload the current mode's duration.
    pub fn reset(&mut self) {
        self.controller.reset(&mut self.display);
        self.ticker.stop();
        self.status = None;
    }

    /// Run every tick that has come due by `now`.
    pub fn on_tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.due(now) {
            let outcome = self.controller.tick(&mut self.display);
            if outcome == TickOutcome::Completed {
                self.status = Some(format!(
                    "{} finished! Press w or b to choose what's next",
                    self.controller.mode()
                ));
            }
            if !self.controller.is_running() {
                self.ticker.stop();
                break;
            }
        }
    }

    /// How long the event loop may wait for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.poll_timeout(now, MAX_POLL)
    }

    /// Show the settings form, creating it on first use.
    pub fn open_settings(&mut self) {
        let controller = &self.controller;
        let tx = &self.settings_tx;
        let form = self.settings.get_or_insert_with(|| {
            SettingsForm::new(
                controller.minutes_for(Mode::Work),
                controller.minutes_for(Mode::Break),
                tx.clone(),
            )
        });
        form.show();
        self.status = None;
    }

    /// The settings form, if it has been created.
    #[must_use]
    pub const fn settings(&self) -> Option<&SettingsForm> {
        self.settings.as_ref()
    }

    /// The settings form, if it has been created.
    pub fn settings_mut(&mut self) -> Option<&mut SettingsForm> {
        self.settings.as_mut()
    }

    /// Check if the settings form is on screen.
    #[must_use]
    pub fn settings_visible(&self) -> bool {
        self.settings.as_ref().is_some_and(SettingsForm::is_visible)
    }

    /// Hand every confirmed settings change to the countdown.
    ///
    /// Returns how many changes were applied.
    pub fn apply_pending_settings(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(change) = self.settings_rx.try_recv() {
            self.controller
                .set_durations(change.work_minutes, change.break_minutes, &mut self.display);
            info!(
                work_minutes = change.work_minutes,
                break_minutes = change.break_minutes,
                "durations applied"
            );
            self.status = Some(format!(
                "Work {} min, break {} min",
                change.work_minutes, change.break_minutes
            ));
            applied += 1;
        }
        applied
    }

    /// Whether the bell should ring now. Clears the pending flag.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.display.bell_pending) && self.bell
    }

    /// Close the main view along with the settings form, if one exists.
    pub fn close(&mut self) {
        if let Some(form) = self.settings.as_mut() {
            form.close();
        }
        self.ticker.stop();
        self.should_quit = true;
    }

    /// Show the key bindings in the status bar.
    pub fn show_help(&mut self) {
        self.status = Some(
            "space:start/stop | w:work | b:break | r:reset | o:settings | q:quit".to_string(),
        );
    }
}

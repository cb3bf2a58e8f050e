//! The countdown state machine.
//!
//! A controller holds one mode (Work or Break), a configured duration for
//! each mode, the remaining seconds, and a running flag. It never schedules
//! anything itself: the host calls [`CountdownController::tick`] once per
//! second while [`CountdownController::is_running`] is true.

use tracing::{debug, info};

use crate::timer::format::{format_mmss, minutes_to_seconds};
use crate::timer::{Display, ExpiryPolicy, Mode};

/// Default work duration in seconds (15 minutes).
const DEFAULT_WORK_SECONDS: i64 = 900;

/// Default break duration in seconds (5 minutes).
const DEFAULT_BREAK_SECONDS: i64 = 300;

/// State of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerState {
    /// Currently selected mode
    mode: Mode,
    /// Configured work duration in seconds
    work_duration_seconds: i64,
    /// Configured break duration in seconds
    break_duration_seconds: i64,
    /// Seconds left in the current countdown
    remaining_seconds: i64,
    /// Whether the countdown is ticking
    running: bool,
    /// Completion has been reported for the loaded countdown
    completion_reported: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            mode: Mode::Work,
            work_duration_seconds: DEFAULT_WORK_SECONDS,
            break_duration_seconds: DEFAULT_BREAK_SECONDS,
            remaining_seconds: DEFAULT_WORK_SECONDS,
            running: false,
            completion_reported: false,
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The controller was stopped; nothing changed.
    Idle,
    /// One second was counted.
    Counted,
    /// The countdown reached zero on this tick.
    ///
    /// Under [`ExpiryPolicy::Overrun`] this is reported once per loaded
    /// countdown, on the first tick at or below zero.
    Completed,
}

/// Drives a Work/Break countdown.
#[derive(Debug, Clone, Default)]
pub struct CountdownController {
    state: TimerState,
    expiry: ExpiryPolicy,
}

impl CountdownController {
    /// Create a stopped controller in Work mode with the given durations.
    #[must_use]
    pub const fn new(work_minutes: i64, break_minutes: i64, expiry: ExpiryPolicy) -> Self {
        let work = minutes_to_seconds(work_minutes);
        Self {
            state: TimerState {
                mode: Mode::Work,
                work_duration_seconds: work,
                break_duration_seconds: minutes_to_seconds(break_minutes),
                remaining_seconds: work,
                running: false,
                completion_reported: false,
            },
            expiry,
        }
    }

    /// Switch to `mode`, stopping the countdown and loading that mode's duration.
    pub fn select_mode(&mut self, mode: Mode, display: &mut dyn Display) {
        if self.state.running {
            self.state.running = false;
            display.running_changed(false);
        }
        self.state.mode = mode;
        self.load(self.duration_for(mode));
        info!(mode = %mode, remaining = self.state.remaining_seconds, "mode selected");
        display.show(&self.format_remaining());
    }

    /// Reload the current mode's duration and stop.
    pub fn reset(&mut self, display: &mut dyn Display) {
        self.select_mode(self.state.mode, display);
    }

    /// Toggle between running and stopped.
    ///
    /// Returns the new running state. The host should start calling
    /// [`tick`](Self::tick) every second when this returns `true` and stop
    /// when it returns `false`.
    pub fn start_stop(&mut self, display: &mut dyn Display) -> bool {
        self.state.running = !self.state.running;
        info!(
            running = self.state.running,
            remaining = self.state.remaining_seconds,
            "countdown toggled"
        );
        display.running_changed(self.state.running);
        self.state.running
    }

    /// Count one second.
    pub fn tick(&mut self, display: &mut dyn Display) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Idle;
        }

        match self.expiry {
            ExpiryPolicy::Stop => {
                if self.state.remaining_seconds > 0 {
                    self.state.remaining_seconds -= 1;
                    display.show(&self.format_remaining());
                }

                if self.state.remaining_seconds <= 0 {
                    self.state.running = false;
                    display.running_changed(false);
                    self.complete(display);
                    TickOutcome::Completed
                } else {
                    TickOutcome::Counted
                }
            }
            ExpiryPolicy::Overrun => {
                self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
                display.show(&self.format_remaining());

                if self.state.remaining_seconds <= 0 && !self.state.completion_reported {
                    self.complete(display);
                    TickOutcome::Completed
                } else {
                    TickOutcome::Counted
                }
            }
        }
    }

    fn complete(&mut self, display: &mut dyn Display) {
        self.state.completion_reported = true;
        info!(mode = %self.state.mode, "countdown completed");
        display.completed(self.state.mode);
    }

    /// Store new durations, given in minutes.
    ///
    /// Values are stored as given; if the active mode's duration changed,
    /// the countdown is reloaded with it. The running flag is left alone.
    pub fn set_durations(&mut self, work_minutes: i64, break_minutes: i64, display: &mut dyn Display) {
        let active_before = self.duration_for(self.state.mode);

        self.state.work_duration_seconds = minutes_to_seconds(work_minutes);
        self.state.break_duration_seconds = minutes_to_seconds(break_minutes);
        debug!(
            work_seconds = self.state.work_duration_seconds,
            break_seconds = self.state.break_duration_seconds,
            "durations updated"
        );

        let active_after = self.duration_for(self.state.mode);
        if active_after != active_before {
            self.load(active_after);
            display.show(&self.format_remaining());
        }
    }

    /// Start a fresh countdown of `seconds`.
    fn load(&mut self, seconds: i64) {
        self.state.remaining_seconds = seconds;
        self.state.completion_reported = false;
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.state.remaining_seconds)
    }

    /// Configured duration for `mode`, in seconds.
    #[must_use]
    pub const fn duration_for(&self, mode: Mode) -> i64 {
        match mode {
            Mode::Work => self.state.work_duration_seconds,
            Mode::Break => self.state.break_duration_seconds,
        }
    }

    /// Configured duration for `mode`, in whole minutes.
    #[must_use]
    pub const fn minutes_for(&self, mode: Mode) -> i64 {
        self.duration_for(mode) / 60
    }

    /// Fraction of the active mode's duration that has elapsed (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.duration_for(self.state.mode);
        if total <= 0 {
            return 1.0;
        }
        let elapsed = total.saturating_sub(self.state.remaining_seconds);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Currently selected mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Seconds left.
    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.state.remaining_seconds
    }

    /// Check if the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Behaviour at zero.
    #[must_use]
    pub const fn expiry(&self) -> ExpiryPolicy {
        self.expiry
    }
}

//! Fixed-cadence tick scheduling for the event loop.

use std::time::{Duration, Instant};

/// Interval between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Tracks when the next tick is due.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Arm the ticker; the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Disarm; [`due`](Self::due) reports nothing until the next start.
    pub fn stop(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Number of ticks that have come due by `now`.
    ///
    /// Missed ticks are counted rather than dropped, so a stalled loop
    /// catches up on its next pass.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };

        let mut count = 0;
        while next <= now {
            count += 1;
            next += self.period;
        }
        self.next = Some(next);
        count
    }

    /// How long the event loop may block without delaying a tick.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next
            .map_or(max, |next| next.saturating_duration_since(now).min(max))
    }
}

//! The display side of the countdown.

use crate::timer::Mode;

/// Receives refreshes from a [`CountdownController`](crate::timer::CountdownController).
///
/// Only `show` is required; hosts that do not care about state changes or
/// completion can ignore the other notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Display {
    /// Render the remaining time, already formatted as MM:SS.
    fn show(&mut self, text: &str);

    /// The countdown started or stopped.
    fn running_changed(&mut self, _running: bool) {}

    /// The countdown for `mode` reached zero.
    fn completed(&mut self, _mode: Mode) {}
}


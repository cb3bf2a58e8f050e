//! Work/Break countdown.
//!
//! Provides the countdown state machine and its display contract:
//! - Two modes with independently configurable durations
//! - Start/stop, reset, and mode switching
//! - Once-per-second ticking driven by the host
//! - MM:SS formatting

mod controller;
mod display;
pub mod format;
mod mode;

pub use controller::{CountdownController, TickOutcome};
#[cfg(test)]
pub use display::MockDisplay;
pub use display::Display;
pub use format::{format_minutes, format_mmss};
pub use mode::{ExpiryPolicy, Mode};

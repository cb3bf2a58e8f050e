//! Command implementations for pomo.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod tui;

pub use completions::completions;
pub use config::config;
pub use tui::tui;

//! pomo - A Pomodoro timer for the terminal
//!
//! This crate provides a Work/Break countdown with a full-screen terminal
//! interface, a settings form for the two durations, and a small CLI for
//! managing the configuration file.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use timer::{CountdownController, Mode};

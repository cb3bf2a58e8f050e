//! Output formatting for pomo.
//!
//! This module provides formatters for displaying configuration in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;

pub use json::*;
pub use pretty::*;

/// Format configuration based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config(config: &Config, path: &Path, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config, path),
    }
}

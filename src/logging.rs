//! Logging setup.
//!
//! The TUI owns the terminal while it runs, so log output goes to
//! `~/.pomo/pomo.log` instead of stderr. `POMO_LOG` takes precedence over
//! the configured level and accepts any `EnvFilter` directive.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::PomoError;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "POMO_LOG";

/// Validate a log level name such as `info` or `debug`.
///
/// Only the level names are accepted, in any case. Empty and numeric levels
/// are rejected.
///
/// # Errors
///
/// Returns `PomoError::Parse` if the level is not recognised.
pub fn parse_level(level: &str) -> Result<LevelFilter, PomoError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(PomoError::Parse(format!("Unknown log level: {level:?}"))),
    }
}

/// Build the filter directive for this crate at `level`.
///
/// # Errors
///
/// Returns `PomoError::Parse` if the level is not recognised.
pub fn filter_directive(level: &str) -> Result<String, PomoError> {
    let level = parse_level(level)?.to_string().to_lowercase();
    Ok(format!("pomo={level}"))
}

/// Send tracing output to `path`, appending to any existing log.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the level is invalid, or a
/// global subscriber is already installed.
pub fn init_file_logging(path: &Path, default_level: &str) -> Result<(), PomoError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(filter_directive(default_level)?),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_parse_level_rejects_empty_and_numbers() {
        for level in ["", "   ", "1", "5", "0"] {
            let err = parse_level(level).unwrap_err();
            assert!(matches!(err, PomoError::Parse(_)), "{level:?} was accepted");
        }
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("info").unwrap(), "pomo=info");
        assert!(filter_directive("").is_err());
    }
}

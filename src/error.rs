//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur outside the countdown core.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed or serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The terminal could not be set up, drawn, or read.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A settings message could not be delivered.
    #[error("Channel error: {0}")]
    Channel(String),
}

impl From<serde_json::Error> for PomoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for PomoError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

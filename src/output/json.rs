//! JSON output formatting for pomo.

use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::PomoError;

/// Format configuration as JSON, along with where it lives
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &Path) -> Result<String, PomoError> {
    let output = json!({
        "path": path.display().to_string(),
        "exists": path.exists(),
        "config": config
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

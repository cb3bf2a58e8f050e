//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::timer::{CountdownController, ExpiryPolicy};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
    /// General settings.
    pub general: GeneralConfig,
}

/// Countdown settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work duration in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break duration in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// What happens when a countdown reaches zero.
    #[serde(default)]
    pub on_expiry: ExpiryPolicy,
    /// Ring the terminal bell when a countdown completes.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Log level used when `POMO_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    15
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            on_expiry: ExpiryPolicy::default(),
            bell: default_true(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            log_level: default_log_level(),
        }
    }
}

impl TimerConfig {
    /// Build a stopped controller from these settings.
    #[must_use]
    pub fn controller(&self) -> CountdownController {
        CountdownController::new(
            i64::from(self.work_minutes),
            i64::from(self.break_minutes),
            self.on_expiry,
        )
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })?;

        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

//! Configuration command implementation.

use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::logging;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or written, or a new
/// value is invalid.
pub fn config(paths: &Paths, cmd: ConfigCommands, format: OutputFormat) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_config(&config, &paths.config_file, format)
        }

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&json!({
                "path": paths.config_file.display().to_string(),
                "exists": paths.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },

        ConfigCommands::Set {
            work,
            break_minutes,
            on_expiry,
            bell,
            log_level,
            default_output,
        } => {
            let mut config = Config::load_from_path(&paths.config_file)?;
            let mut changed = false;

            if let Some(work) = work {
                config.timer.work_minutes = work;
                changed = true;
            }
            if let Some(break_minutes) = break_minutes {
                config.timer.break_minutes = break_minutes;
                changed = true;
            }
            if let Some(on_expiry) = on_expiry {
                config.timer.on_expiry = on_expiry;
                changed = true;
            }
            if let Some(bell) = bell {
                config.timer.bell = bell;
                changed = true;
            }
            if let Some(level) = log_level {
                logging::parse_level(&level)?;
                config.general.log_level = level.trim().to_lowercase();
                changed = true;
            }
            if let Some(default_output) = default_output {
                config.general.default_output = default_output;
                changed = true;
            }

            if !changed {
                return Err(PomoError::Config(
                    "Nothing to set. Pass at least one option, see 'pomo config set --help'"
                        .to_string(),
                ));
            }

            save(paths, &config)?;
            info!(path = %paths.config_file.display(), "config updated");
            saved_output(&config, paths, format, "Configuration saved")
        }

        ConfigCommands::Reset => {
            let config = Config::default();
            save(paths, &config)?;
            info!(path = %paths.config_file.display(), "config reset");
            saved_output(&config, paths, format, "Configuration reset to defaults")
        }
    }
}

fn save(paths: &Paths, config: &Config) -> Result<(), PomoError> {
    paths.ensure_dirs()?;
    config.save_to_path(&paths.config_file)
}

fn saved_output(
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
    message: &str,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Json => format_config(config, &paths.config_file, format),
        OutputFormat::Pretty => Ok(format!(
            "{}\n\n{}",
            format!("✅ {message}").green(),
            format_config(config, &paths.config_file, format)?
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ExpiryPolicy;
    use tempfile::TempDir;

    fn paths() -> (TempDir, Paths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".pomo"));
        (temp_dir, paths)
    }

    fn set_work(work: u32) -> ConfigCommands {
        ConfigCommands::Set {
            work: Some(work),
            break_minutes: None,
            on_expiry: None,
            bell: None,
            log_level: None,
            default_output: None,
        }
    }

    #[test]
    fn test_show_defaults_without_file() {
        let (_tmp, paths) = paths();
        let output = config(&paths, ConfigCommands::Show, OutputFormat::Json).unwrap();

        assert!(output.contains("\"work_minutes\": 15"));
        assert!(!paths.config_file.exists());
    }

    #[test]
    fn test_path() {
        let (_tmp, paths) = paths();
        let output = config(&paths, ConfigCommands::Path, OutputFormat::Pretty).unwrap();
        assert!(output.ends_with("config.yaml"));
    }

    #[test]
    fn test_set_saves() {
        let (_tmp, paths) = paths();

        config(&paths, set_work(25), OutputFormat::Json).unwrap();

        let saved = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(saved.timer.work_minutes, 25);
        assert_eq!(saved.timer.break_minutes, 5);
    }

    #[test]
    fn test_set_all_options() {
        let (_tmp, paths) = paths();
        let cmd = ConfigCommands::Set {
            work: None,
            break_minutes: Some(10),
            on_expiry: Some(ExpiryPolicy::Overrun),
            bell: Some(false),
            log_level: Some("DEBUG".to_string()),
            default_output: Some(OutputFormat::Json),
        };

        config(&paths, cmd, OutputFormat::Pretty).unwrap();

        let saved = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(saved.timer.break_minutes, 10);
        assert_eq!(saved.timer.on_expiry, ExpiryPolicy::Overrun);
        assert!(!saved.timer.bell);
        assert_eq!(saved.general.log_level, "debug");
        assert_eq!(saved.general.default_output, OutputFormat::Json);
    }

    #[test]
    fn test_set_nothing_is_an_error() {
        let (_tmp, paths) = paths();
        let cmd = ConfigCommands::Set {
            work: None,
            break_minutes: None,
            on_expiry: None,
            bell: None,
            log_level: None,
            default_output: None,
        };

        assert!(matches!(
            config(&paths, cmd, OutputFormat::Pretty),
            Err(PomoError::Config(_))
        ));
        assert!(!paths.config_file.exists());
    }

    #[test]
    fn test_set_invalid_log_level() {
        let (_tmp, paths) = paths();
        let cmd = ConfigCommands::Set {
            work: None,
            break_minutes: None,
            on_expiry: None,
            bell: None,
            log_level: Some("chatty".to_string()),
            default_output: None,
        };

        assert!(matches!(
            config(&paths, cmd, OutputFormat::Pretty),
            Err(PomoError::Parse(_))
        ));
    }

    #[test]
    fn test_reset() {
        let (_tmp, paths) = paths();
        config(&paths, set_work(45), OutputFormat::Json).unwrap();

        config(&paths, ConfigCommands::Reset, OutputFormat::Json).unwrap();

        let saved = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(saved, Config::default());
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;
use crate::timer::ExpiryPolicy;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro countdown timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Alternate focused work periods with short breaks. Running pomo with no
command opens the timer; the Work and Break durations can be changed from
the settings form inside the timer or saved with 'pomo config set'.

QUICK START:
  pomo                       Open the timer (15 min work, 5 min break)
  pomo tui --work 25         Open the timer with a 25 minute work period
  pomo config set --break 10 Save a 10 minute break as the default
  pomo config show           Show the effective configuration

KEYS:
  space      Start / stop
  w / b      Switch to Work / Break
  r          Reset the current countdown
  o          Open settings
  q          Quit

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the timer (default)
    ///
    /// Starts the full-screen countdown in Work mode. Durations come from
    /// the configuration file unless overridden here; overrides only apply
    /// to this run.
    ///
    /// # Examples
    ///
    ///   pomo                       Open with configured durations
    ///   pomo tui --work 50 --break 10
    ///   pomo tui --on-expiry overrun
    #[command(alias = "t")]
    Tui(TuiArgs),

    /// Show or edit the configuration file
    ///
    /// # Subcommands
    ///
    ///   show    Print the effective configuration
    ///   path    Print the configuration file location
    ///   set     Change settings and save them
    ///   reset   Restore the default configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions bash > /usr/local/etc/bash_completion.d/pomo
    ///   pomo completions zsh > ~/.zsh/completions/_pomo
    ///   pomo completions fish > ~/.config/fish/completions/pomo.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Tui(TuiArgs::default())
    }
}

/// Options for a single timer run.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct TuiArgs {
    /// Work duration in minutes
    #[arg(long, short = 'w')]
    pub work: Option<u32>,

    /// Break duration in minutes
    #[arg(long = "break", short = 'b')]
    pub break_minutes: Option<u32>,

    /// What to do when a countdown reaches zero
    #[arg(long, value_enum)]
    pub on_expiry: Option<ExpiryPolicy>,

    /// Do not ring the terminal bell on completion
    #[arg(long)]
    pub no_bell: bool,
}

impl TuiArgs {
    /// Layer these options over the configured timer settings.
    #[must_use]
    pub fn apply(&self, mut timer: TimerConfig) -> TimerConfig {
        if let Some(work) = self.work {
            timer.work_minutes = work;
        }
        if let Some(break_minutes) = self.break_minutes {
            timer.break_minutes = break_minutes;
        }
        if let Some(on_expiry) = self.on_expiry {
            timer.on_expiry = on_expiry;
        }
        if self.no_bell {
            timer.bell = false;
        }
        timer
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Change settings and save them
    ///
    /// Examples:
    ///   pomo config set --work 25 --break 5
    ///   pomo config set --on-expiry overrun
    ///   pomo config set --bell false --log-level debug
    Set {
        /// Work duration in minutes
        #[arg(long, short = 'w')]
        work: Option<u32>,

        /// Break duration in minutes
        #[arg(long = "break", short = 'b')]
        break_minutes: Option<u32>,

        /// What to do when a countdown reaches zero
        #[arg(long, value_enum)]
        on_expiry: Option<ExpiryPolicy>,

        /// Ring the terminal bell on completion
        #[arg(long)]
        bell: Option<bool>,

        /// Log level for the timer (trace, debug, info, warn, error, off)
        #[arg(long)]
        log_level: Option<String>,

        /// Default output format for commands
        #[arg(long, value_enum)]
        default_output: Option<OutputFormat>,
    },

    /// Restore the default configuration
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
        assert!(matches!(Commands::default(), Commands::Tui(args) if args == TuiArgs::default()));
    }

    #[test]
    fn test_cli_tui_overrides() {
        let cli = Cli::try_parse_from([
            "pomo", "tui", "--work", "25", "-b", "10", "--on-expiry", "overrun", "--no-bell",
        ])
        .unwrap();
        if let Some(Commands::Tui(args)) = cli.command {
            assert_eq!(args.work, Some(25));
            assert_eq!(args.break_minutes, Some(10));
            assert_eq!(args.on_expiry, Some(ExpiryPolicy::Overrun));
            assert!(args.no_bell);
        } else {
            panic!("Expected Tui command");
        }
    }

    #[test]
    fn test_cli_tui_alias() {
        let cli = Cli::try_parse_from(["pomo", "t"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui(_))));
    }

    #[test]
    fn test_tui_args_apply() {
        let args = TuiArgs {
            work: Some(50),
            break_minutes: None,
            on_expiry: None,
            no_bell: true,
        };

        let timer = args.apply(TimerConfig::default());

        assert_eq!(timer.work_minutes, 50);
        assert_eq!(timer.break_minutes, 5);
        assert_eq!(timer.on_expiry, ExpiryPolicy::Stop);
        assert!(!timer.bell);
    }

    #[test]
    fn test_tui_args_apply_nothing() {
        let timer = TuiArgs::default().apply(TimerConfig::default());
        assert_eq!(timer, TimerConfig::default());
    }

    #[test]
    fn test_cli_config_set() {
        let cli = Cli::try_parse_from([
            "pomo", "config", "set", "--work", "30", "--bell", "false", "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        if let Some(Commands::Config(args)) = cli.command {
            if let ConfigCommands::Set { work, bell, break_minutes, .. } = args.command {
                assert_eq!(work, Some(30));
                assert_eq!(bell, Some(false));
                assert!(break_minutes.is_none());
            } else {
                panic!("Expected Set subcommand");
            }
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_config_show() {
        let cli = Cli::try_parse_from(["pomo", "config", "show"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Show));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["pomo", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions { shell: Shell::Zsh })));
    }

    #[test]
    fn test_cli_rejects_negative_minutes() {
        assert!(Cli::try_parse_from(["pomo", "tui", "--work", "-5"]).is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}

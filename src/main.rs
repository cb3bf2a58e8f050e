use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;
use pomo::OutputFormat;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let format = cli.output.unwrap_or_else(|| default_output(&paths));

    let output = match cli.command.unwrap_or_default() {
        Commands::Tui(args) => {
            commands::tui(&paths, &args)?;
            String::new()
        }
        Commands::Config(args) => commands::config(&paths, args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// The configured output format, or the default if the config file is unreadable.
fn default_output(paths: &Paths) -> OutputFormat {
    Config::load_from_path(&paths.config_file)
        .map(|config| config.general.default_output)
        .unwrap_or_default()
}

use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::timer::{format_minutes, format_mmss, Mode};

/// Format configuration as a human-readable summary
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let timer = &config.timer;
    let mut output = Vec::new();

    let location = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created, using defaults)", path.display())
    };
    output.push(format!("{} {}", "Config".bold(), location.dimmed()));
    output.push("─".repeat(40));

    for (mode, minutes) in [
        (Mode::Work, timer.work_minutes),
        (Mode::Break, timer.break_minutes),
    ] {
        let minutes = i64::from(minutes);
        let label = format!("{mode}:");
        output.push(format!(
            "{:<12}{}  {}",
            label,
            format_minutes(minutes),
            format_mmss(minutes * 60).dimmed()
        ));
    }

    output.push(format!("{:<12}{}", "At zero:", timer.on_expiry));
    output.push(format!(
        "{:<12}{}",
        "Bell:",
        if timer.bell { "on".green() } else { "off".red() }
    ));
    output.push(format!("{:<12}{}", "Log level:", config.general.log_level));

    output.join("\n")
}

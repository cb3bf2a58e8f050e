//! Timer command implementation.

use tracing::info;

use crate::cli::args::TuiArgs;
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::logging;

/// Open the timer with configured durations and any overrides in `args`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, logging cannot be
/// set up, or the terminal fails.
pub fn tui(paths: &Paths, args: &TuiArgs) -> Result<(), PomoError> {
    let config = Config::load_from_path(&paths.config_file)?;
    paths.ensure_dirs()?;
    logging::init_file_logging(&paths.log_file, &config.general.log_level)?;

    let timer = args.apply(config.timer);
    info!(
        work_minutes = timer.work_minutes,
        break_minutes = timer.break_minutes,
        on_expiry = %timer.on_expiry,
        bell = timer.bell,
        "starting timer"
    );

    crate::tui::run(timer.controller(), timer.bell)
}

//! Time formatting helpers.

/// Format a number of seconds as MM:SS.
///
/// Minutes are padded to at least two digits and are not capped at 59.
/// Negative values keep their sign in front of the absolute time, so `-1`
/// renders as `-00:01`.
#[must_use]
pub fn format_mmss(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let abs = total_seconds.unsigned_abs();
    let minutes = abs / 60;
    let seconds = abs % 60;
    format!("{sign}{minutes:02}:{seconds:02}")
}

/// Format a whole number of minutes as a human-readable string.
#[must_use]
pub fn format_minutes(minutes: i64) -> String {
    format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
}

/// Convert minutes to seconds without overflowing.
#[must_use]
pub const fn minutes_to_seconds(minutes: i64) -> i64 {
    minutes.saturating_mul(60)
}

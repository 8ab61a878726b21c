//! Human-readable rendering of trip durations.

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 60.0 * SECS_PER_MINUTE;
const SECS_PER_DAY: f64 = 24.0 * SECS_PER_HOUR;

/// Converts a number of seconds into e.g. `1 hours, 1 minutes and 1 seconds`.
///
/// Minutes and seconds are always shown. Hours are prepended when non-zero,
/// or whenever days are shown. Leftover seconds are rounded to two decimals.
/// Negative or non-finite input renders as zero.
pub fn format_duration(seconds: f64) -> String {
    let mut remainder = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };

    let days = (remainder / SECS_PER_DAY).floor();
    remainder -= days * SECS_PER_DAY;

    let hours = (remainder / SECS_PER_HOUR).floor();
    remainder -= hours * SECS_PER_HOUR;

    let minutes = (remainder / SECS_PER_MINUTE).floor();
    remainder -= minutes * SECS_PER_MINUTE;

    let secs = (remainder * 100.0).round() / 100.0;

    let mut out = String::new();
    if days > 0.0 {
        out.push_str(&format!("{days} days, {hours} hours, "));
    } else if hours > 0.0 {
        out.push_str(&format!("{hours} hours, "));
    }
    out.push_str(&format!("{minutes} minutes and {secs} seconds"));
    out
}

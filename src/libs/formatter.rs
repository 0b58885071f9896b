//! Time duration formatting utilities for user-friendly display.
//!
//! This module provides the single consolidated set of formatting functions
//! used throughout the application for converting durations to and from
//! their string representations. It is used for per-day report rows, grand
//! totals, requirement differences, and data export.
//!
//! ## Format Specifications
//!
//! All durations follow the `H:MM:SS` pattern:
//! - Hours are unpadded and unbounded in width
//! - Minutes and seconds are zero-padded to 2 digits
//! - Fractional seconds are floored
//! - Negative durations are treated as zero
//!
//! ### Examples
//! - 0 seconds → `0:00:00`
//! - 3661 seconds → `1:01:01`
//! - 9 hours 30 minutes → `9:30:00`
//!
//! ## Sentinels
//!
//! Day fields without a computable span are rendered as `Invalid`; a
//! difference whose operands are missing or whose result would be negative
//! is rendered as `N/A`. Neither sentinel ever parses back into a duration.

use chrono::Duration;

/// Display marker for a day field without a computable span.
pub const INVALID: &str = "Invalid";
/// Display marker for a difference that is not applicable.
pub const NOT_APPLICABLE: &str = "N/A";

/// Formats a duration into an `H:MM:SS` string.
///
/// Hours are unpadded and may exceed two digits; minutes and seconds are
/// zero-padded. Negative durations are clamped to `0:00:00`.
///
/// # Examples
///
/// ```rust
/// use punchlog::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::zero()), "0:00:00");
/// assert_eq!(format_duration(&Duration::seconds(3661)), "1:01:01");
/// assert_eq!(format_duration(&(Duration::hours(9) + Duration::minutes(30))), "9:30:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    format!("{}:{:02}:{:02}", hours, mins, secs)
}

/// Formats an optional day span, rendering `None` as [`INVALID`].
pub fn format_day_duration(duration: Option<Duration>) -> String {
    match duration {
        Some(duration) => format_duration(&duration),
        None => INVALID.to_string(),
    }
}

/// Parses an `H:MM:SS` or `H:MM` string back into a duration.
///
/// Returns `None` for empty input, sentinel strings, more than three
/// segments, or non-numeric segments.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut seconds: i64 = 0;
    for part in &parts {
        seconds = seconds * 60 + part.parse::<i64>().ok().filter(|n| *n >= 0)?;
    }
    // "H:MM" carries no seconds segment; scale up to seconds.
    if parts.len() == 2 {
        seconds *= 60;
    } else if parts.len() == 1 {
        seconds *= 3600;
    }
    Some(Duration::seconds(seconds))
}

/// Computes the non-negative gap between two optional durations.
///
/// Returns `None` when either operand is missing or when `a` is shorter
/// than `b`; negative gaps are never surfaced as durations.
pub fn difference(a: Option<Duration>, b: Option<Duration>) -> Option<Duration> {
    let (a, b) = (a?, b?);
    if a < b {
        return None;
    }
    Some(a - b)
}

/// Formats an optional difference, rendering `None` as [`NOT_APPLICABLE`].
pub fn format_difference(difference: Option<Duration>) -> String {
    match difference {
        Some(difference) => format_duration(&difference),
        None => NOT_APPLICABLE.to_string(),
    }
}

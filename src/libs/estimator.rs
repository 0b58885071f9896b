//! Punch-out time estimation.
//!
//! Given a punch-in wall-clock time and a required working duration,
//! computes the wall-clock time at which the requirement is satisfied.
//! The result wraps past midnight, so a late punch-in with a long
//! requirement lands in the early hours of the next day.

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Estimates the punch-out time for a punch-in time and required duration.
///
/// The punch-in is parsed as `HH:MM` or `HH:MM:SS` (seconds default to 0);
/// an empty or malformed punch-in yields `None`. The required duration is
/// parsed as `H[:MM[:SS]]` with every absent or unparseable segment
/// defaulting to 0. The sum wraps modulo 24 hours and is formatted as
/// zero-padded `HH:MM:SS`.
pub fn estimate_punch_out(punch_in: &str, required: &str) -> Option<String> {
    let punch_in_seconds = parse_clock_time(punch_in)?;
    let required_seconds = parse_lenient_duration(required);

    let end = (punch_in_seconds + required_seconds).rem_euclid(SECONDS_PER_DAY);
    Some(format!("{:02}:{:02}:{:02}", end / 3600, (end % 3600) / 60, end % 60))
}

/// Parses a wall-clock `HH:MM[:SS]` string into seconds since midnight.
fn parse_clock_time(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut parts = value.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Parses a duration string segment by segment, defaulting bad parts to 0.
fn parse_lenient_duration(value: &str) -> i64 {
    let mut parts = value.trim().split(':');
    let hours: i64 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minutes: i64 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let seconds: i64 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    hours * 3600 + minutes * 60 + seconds
}

/// Progressively shapes free-form digit input into an `HH:MM:SS` string.
///
/// Digits are taken in groups of two; the hours group is clamped to 23 and
/// the minutes/seconds groups to 59 as they are entered. Non-digit
/// characters and digits beyond the sixth are dropped. This is an input
/// ergonomics helper for interactive callers and has no effect on
/// aggregation.
pub fn mask_time(input: &str) -> String {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).take(6).collect();

    let mut groups = Vec::new();
    for (index, chunk) in digits.chunks(2).enumerate() {
        let max = if index == 0 { 23 } else { 59 };
        match chunk {
            [a, b] => groups.push(format!("{:02}", (a * 10 + b).min(max))),
            [a] => groups.push(format!("{}", a)),
            _ => {}
        }
    }
    groups.join(":")
}

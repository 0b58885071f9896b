//! Punch record parsing for raw attendance log text.
//!
//! Converts whitespace-delimited punch-log lines into normalized
//! [`PunchRecord`] values. Each line carries an employee id, a date in
//! `DD/MM/YYYY` format, a time in `HH:MM:SS` format, and a device id.
//! Malformed lines are dropped silently; a single bad line never aborts
//! a full run.
//!
//! All timestamps are timezone-naive wall-clock values. No timezone
//! conversion is performed anywhere in the crate.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Header token that marks the first line of an exported punch log.
///
/// Attendance devices export logs with a column-name header row whose
/// first token is `EMP_NMBR`. The header is recognized case-insensitively
/// and only in the very first line of the input.
pub const HEADER_TOKEN: &str = "emp_nmbr";

/// One recorded punch event (clock-in or clock-out) for an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchRecord {
    /// Employee identifier, kept verbatim from the log.
    pub employee_id: String,
    /// Naive local wall-clock timestamp of the punch.
    pub timestamp: NaiveDateTime,
    /// Identifier of the device that recorded the punch.
    pub device_id: String,
}

impl PunchRecord {
    /// Parses one whitespace-split log line into a punch record.
    ///
    /// Expects at least four tokens: employee id, `DD/MM/YYYY` date,
    /// `HH:MM:SS` time, device id. Anything after the date inside the
    /// date token itself is ignored. Returns `None` for missing tokens,
    /// empty date parts, or combinations that do not resolve to a real
    /// calendar date-time (e.g. month 13 or day 32).
    pub fn parse_line(tokens: &[&str]) -> Option<PunchRecord> {
        if tokens.len() < 4 {
            return None;
        }
        let (employee_id, log_date, time, device_id) = (tokens[0], tokens[1], tokens[2], tokens[3]);

        // The device export sometimes pads the date column; keep the date part only.
        let date = log_date.split_whitespace().next()?;
        let timestamp = parse_timestamp(date, time)?;

        Some(PunchRecord {
            employee_id: employee_id.to_string(),
            timestamp,
            device_id: device_id.to_string(),
        })
    }
}

/// Reassembles a `DD/MM/YYYY` date and `HH:MM:SS` time into a naive timestamp.
///
/// Returns `None` when any date part is empty or absent, the time is empty,
/// or the parts do not form a valid calendar date-time.
fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let mut parts = date.split('/');
    let day = parts.next().filter(|p| !p.is_empty())?;
    let month = parts.next().filter(|p| !p.is_empty())?;
    let year = parts.next().filter(|p| !p.is_empty())?;
    if time.is_empty() {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;
    Some(NaiveDateTime::new(date, time))
}

/// Parses a full punch-log blob into normalized punch records.
///
/// The blob is trimmed and split into lines; every non-empty line is
/// whitespace-split and handed to [`PunchRecord::parse_line`]. A header
/// line (first token equal to [`HEADER_TOKEN`], case-insensitive) is
/// skipped when it is the very first line. Lines that fail to parse are
/// excluded from the result without error.
pub fn parse_log(input: &str) -> Vec<PunchRecord> {
    input
        .trim()
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if index == 0 && tokens.first().is_some_and(|t| t.eq_ignore_ascii_case(HEADER_TOKEN)) {
                return None;
            }
            PunchRecord::parse_line(&tokens)
        })
        .collect()
}

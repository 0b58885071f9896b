//! Contains shared logic for per-day punch aggregation.

use crate::libs::punch::PunchRecord;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

/// Default start of the business-hours window (08:00:00).
pub const BUSINESS_START: (u32, u32, u32) = (8, 0, 0);
/// Default end of the business-hours window (17:30:00).
pub const BUSINESS_END: (u32, u32, u32) = (17, 30, 0);

/// The daily business-hours window used to clip realized spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for BusinessWindow {
    fn default() -> Self {
        let (sh, sm, ss) = BUSINESS_START;
        let (eh, em, es) = BUSINESS_END;
        Self {
            start: NaiveTime::from_hms_opt(sh, sm, ss).unwrap(),
            end: NaiveTime::from_hms_opt(eh, em, es).unwrap(),
        }
    }
}

/// Computed spans for one calendar date of the punch log.
///
/// `None` marks a field as invalid: fewer than two punches that day, a
/// degenerate ordering between the earliest and latest punch, or (for
/// `realized` only) a day that falls entirely outside the business window.
/// Invalid fields are kept in the output so the date still appears in
/// reports; they are simply excluded from any totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResult {
    pub date: NaiveDate,
    /// Raw span between the first and last punch of the day.
    pub total: Option<Duration>,
    /// Span clipped to the business-hours window.
    pub realized: Option<Duration>,
}

/// Groups punch records by calendar date and computes per-day spans.
///
/// For each date with at least two punches, the raw span is the gap between
/// the earliest and the latest punch. The realized span clips both ends to
/// the business window on that day; when the clipped start is not strictly
/// before the clipped end, the realized field alone is marked invalid.
/// Results are sorted ascending by date.
pub fn aggregate(records: &[PunchRecord], window: &BusinessWindow) -> Vec<DayResult> {
    let mut grouped: HashMap<NaiveDate, Vec<NaiveDateTime>> = HashMap::new();
    for record in records {
        grouped.entry(record.timestamp.date()).or_default().push(record.timestamp);
    }

    let mut results: Vec<DayResult> = grouped.into_iter().map(|(date, times)| day_result(date, &times, window)).collect();
    results.sort_by_key(|day| day.date);
    results
}

fn day_result(date: NaiveDate, times: &[NaiveDateTime], window: &BusinessWindow) -> DayResult {
    let (earliest, latest) = match (times.iter().min(), times.iter().max()) {
        (Some(min), Some(max)) if times.len() >= 2 => (*min, *max),
        _ => return DayResult { date, total: None, realized: None },
    };

    // All punches that day collapsing onto a single instant leave no span.
    if earliest >= latest {
        return DayResult { date, total: None, realized: None };
    }

    let realized_earliest = earliest.max(NaiveDateTime::new(date, window.start));
    let realized_latest = latest.min(NaiveDateTime::new(date, window.end));
    let realized = if realized_earliest >= realized_latest {
        None
    } else {
        Some(realized_latest - realized_earliest)
    };

    DayResult {
        date,
        total: Some(latest - earliest),
        realized,
    }
}

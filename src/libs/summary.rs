use crate::libs::formatter::difference;
use crate::libs::report::DayResult;
use chrono::Duration;

/// Default requirement used for the shortfall figure: 42 hours.
pub const REQUIRED_HOURS: i64 = 42;

/// Aggregate figures derived from a set of day results.
///
/// Totals skip invalid day fields entirely; an invalid day contributes
/// nothing rather than counting as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSummary {
    /// Sum of valid raw spans across all days.
    pub total: Duration,
    /// Sum of valid realized (business-window clipped) spans.
    pub realized: Duration,
    /// Non-negative gap between total and realized, when applicable.
    pub overhead: Option<Duration>,
    /// Non-negative gap still owed against the requirement, when applicable.
    pub remaining: Option<Duration>,
    /// The requirement the remaining figure was computed against.
    pub requirement: Duration,
}

pub trait SummaryCalculator {
    fn summarize(&self, requirement: Duration) -> LogSummary;
}

impl SummaryCalculator for Vec<DayResult> {
    fn summarize(&self, requirement: Duration) -> LogSummary {
        let total = self.iter().filter_map(|day| day.total).fold(Duration::zero(), |acc, d| acc + d);
        let realized = self.iter().filter_map(|day| day.realized).fold(Duration::zero(), |acc, d| acc + d);

        LogSummary {
            total,
            realized,
            overhead: difference(Some(total), Some(realized)),
            remaining: difference(Some(requirement), Some(realized)),
            requirement,
        }
    }
}

use crate::libs::formatter::{difference, format_day_duration, format_difference, format_duration};
use crate::libs::report::DayResult;
use crate::libs::summary::LogSummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the per-day punch report table.
    pub fn days(days: &[DayResult]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TOTAL HOURS", "REALIZED HOURS", "DIFFERENCE"]);
        for day in days {
            table.add_row(row![
                day.date.format("%Y-%m-%d"),
                format_day_duration(day.total),
                format_day_duration(day.realized),
                format_difference(difference(day.total, day.realized))
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the aggregate summary table.
    pub fn summary(summary: &LogSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Total hours", format_duration(&summary.total)]);
        table.add_row(row!["Realized hours", format_duration(&summary.realized)]);
        table.add_row(row!["Difference", format_difference(summary.overhead)]);
        table.add_row(row![
            format!("Remaining of {}", format_duration(&summary.requirement)),
            format_difference(summary.remaining)
        ]);
        table.printstd();

        Ok(())
    }
}

//! Data export functionality for external analysis and backup.
//!
//! Writes the computed day results and the aggregate summary to CSV, JSON,
//! or Excel files. Exported values are the same pre-formatted strings shown
//! in the console tables, so a day without a computable span exports as
//! `Invalid` and a suppressed difference as `N/A`.

use crate::libs::formatter::{difference, format_day_duration, format_difference, format_duration};
use crate::libs::messages::Message;
use crate::libs::report::DayResult;
use crate::libs::summary::LogSummary;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with basic header formatting.
    Excel,
}

/// One exported day row, pre-formatted for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDay {
    pub date: String,
    pub total_hours: String,
    pub realized_hours: String,
    pub difference: String,
}

/// The full export payload: day rows plus summary figures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportPayload {
    pub days: Vec<ExportDay>,
    pub total_hours: String,
    pub realized_hours: String,
    pub difference: String,
    pub requirement: String,
    pub requirement_remaining: String,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        // Generate default filename with timestamp for uniqueness
        let default_name = format!("punchlog_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports day results and their summary to the configured output file.
    pub fn export(&self, days: &[DayResult], summary: &LogSummary) -> Result<()> {
        let payload = build_payload(days, summary);

        match self.format {
            ExportFormat::Csv => self.export_csv(&payload)?,
            ExportFormat::Json => self.export_json(&payload)?,
            ExportFormat::Excel => self.export_excel(&payload)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, payload: &ExportPayload) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        // Day rows section
        wtr.write_record(&["DAYS", "", "", ""])?;
        wtr.write_record(&["Date", "Total Hours", "Realized Hours", "Difference"])?;
        for day in &payload.days {
            wtr.write_record(&[
                day.date.clone(),
                day.total_hours.clone(),
                day.realized_hours.clone(),
                day.difference.clone(),
            ])?;
        }

        // Summary section with spacing
        wtr.write_record(&["", "", "", ""])?;
        wtr.write_record(&["SUMMARY", "", "", ""])?;
        wtr.write_record(&["Total Hours", &payload.total_hours, "", ""])?;
        wtr.write_record(&["Realized Hours", &payload.realized_hours, "", ""])?;
        wtr.write_record(&["Difference", &payload.difference, "", ""])?;
        wtr.write_record(&["Requirement", &payload.requirement, "", ""])?;
        wtr.write_record(&["Requirement Remaining", &payload.requirement_remaining, "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, payload: &ExportPayload) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        let mut file = File::create(&self.output_path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, payload: &ExportPayload) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "DAYS", &header_format)?;
        worksheet.write_string_with_format(1, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(1, 1, "Total Hours", &header_format)?;
        worksheet.write_string_with_format(1, 2, "Realized Hours", &header_format)?;
        worksheet.write_string_with_format(1, 3, "Difference", &header_format)?;

        let mut row = 2;
        for day in &payload.days {
            worksheet.write_string(row, 0, &day.date)?;
            worksheet.write_string(row, 1, &day.total_hours)?;
            worksheet.write_string(row, 2, &day.realized_hours)?;
            worksheet.write_string(row, 3, &day.difference)?;
            row += 1;
        }

        row += 2;
        worksheet.write_string_with_format(row, 0, "SUMMARY", &header_format)?;
        row += 1;
        worksheet.write_string(row, 0, "Total Hours")?;
        worksheet.write_string(row, 1, &payload.total_hours)?;
        row += 1;
        worksheet.write_string(row, 0, "Realized Hours")?;
        worksheet.write_string(row, 1, &payload.realized_hours)?;
        row += 1;
        worksheet.write_string(row, 0, "Difference")?;
        worksheet.write_string(row, 1, &payload.difference)?;
        row += 1;
        worksheet.write_string(row, 0, "Requirement")?;
        worksheet.write_string(row, 1, &payload.requirement)?;
        row += 1;
        worksheet.write_string(row, 0, "Requirement Remaining")?;
        worksheet.write_string(row, 1, &payload.requirement_remaining)?;

        worksheet.autofit();

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

/// Converts computed day results and summary into pre-formatted strings.
pub fn build_payload(days: &[DayResult], summary: &LogSummary) -> ExportPayload {
    let days = days
        .iter()
        .map(|day| ExportDay {
            date: day.date.format("%Y-%m-%d").to_string(),
            total_hours: format_day_duration(day.total),
            realized_hours: format_day_duration(day.realized),
            difference: format_difference(difference(day.total, day.realized)),
        })
        .collect();

    ExportPayload {
        days,
        total_hours: format_duration(&summary.total),
        realized_hours: format_duration(&summary.realized),
        difference: format_difference(summary.overhead),
        requirement: format_duration(&summary.requirement),
        requirement_remaining: format_difference(summary.remaining),
    }
}

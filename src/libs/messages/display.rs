//! Display implementation for punchlog application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent across commands and can be adjusted without touching the
//! call sites.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === INPUT MESSAGES ===
            Message::InputSaved(lines) => format!("Punch log saved ({} lines)", lines),
            Message::InputEmpty => "Input is empty; nothing to process".to_string(),
            Message::InputCacheMissing => "No cached punch log found. Provide --file or run 'punchlog input' first".to_string(),
            Message::InputShowEmpty => "No punch log has been saved yet".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(source) => format!("Punch log report ({})", source),
            Message::NoValidPunches => "No valid punch records found in the input".to_string(),
            Message::ParsedRecords(count) => format!("Parsed {} punch records", count),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader => "Summary".to_string(),

            // === ESTIMATE MESSAGES ===
            Message::EstimatedPunchOut(time) => format!("Estimated punch-out time: {}", time),
            Message::EstimateNotApplicable => "N/A (punch-in time is missing or malformed)".to_string(),
            Message::PromptPunchIn => "Punch-in time (HH:MM or HH:MM:SS)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleSchedule => "Work schedule configuration".to_string(),
            Message::PromptWorkdayStart => "Business window start (HH:MM:SS)".to_string(),
            Message::PromptWorkdayEnd => "Business window end (HH:MM:SS)".to_string(),
            Message::PromptRequiredHours => "Required hours".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNoData => "No day results to export".to_string(),
        };
        write!(f, "{}", text)
    }
}

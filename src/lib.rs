//! # Punchlog - attendance punch-log analyzer
//!
//! A command-line utility for turning raw attendance punch logs into
//! per-day worked-hours reports and requirement summaries.
//!
//! ## Features
//!
//! - **Log Parsing**: Whitespace-delimited punch lines with silent
//!   per-line degradation on malformed input
//! - **Day Aggregation**: Raw first-to-last punch spans and realized
//!   spans clipped to the business-hours window
//! - **Summaries**: Grand totals, total/realized differences, and a
//!   requirement-remaining figure
//! - **Punch-Out Estimation**: Wall-clock estimate that wraps past midnight
//! - **Data Export**: Export results to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

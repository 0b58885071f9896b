//! Core library modules for the punchlog application.
//!
//! Serves as the main entry point for all punchlog library components.
//!
//! ## Features
//!
//! - **Core Engine**: Punch-log parsing, per-day aggregation, duration math
//! - **Presentation**: Console rendering, duration formatting, data export
//! - **Infrastructure**: Configuration, raw-log cache, messaging

pub mod config;
pub mod data_storage;
pub mod estimator;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod punch;
pub mod raw_log;
pub mod report;
pub mod summary;
pub mod view;

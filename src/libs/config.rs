//! Configuration management for the punchlog application.
//!
//! Settings are stored as pretty-printed JSON in the platform-specific
//! application data directory. The file is optional: a missing or partial
//! configuration falls back to the built-in schedule (08:00:00–17:30:00
//! business window, 42 required hours), so the application behaves
//! identically with no setup at all.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::report::{BusinessWindow, BUSINESS_END, BUSINESS_START};
use crate::libs::summary::REQUIRED_HOURS;
use crate::msg_print;
use anyhow::Result;
use chrono::{Duration, NaiveTime};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Work schedule settings: business-hours window and requirement.
///
/// Times are stored as `HH:MM:SS` strings so the file stays hand-editable;
/// unparseable values fall back to the built-in window.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Start of the business-hours window used to clip realized spans.
    pub workday_start: String,
    /// End of the business-hours window.
    pub workday_end: String,
    /// Requirement in hours used for the shortfall figure.
    pub required_hours: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let (sh, sm, ss) = BUSINESS_START;
        let (eh, em, es) = BUSINESS_END;
        Self {
            workday_start: format!("{:02}:{:02}:{:02}", sh, sm, ss),
            workday_end: format!("{:02}:{:02}:{:02}", eh, em, es),
            required_hours: REQUIRED_HOURS,
        }
    }
}

impl ScheduleConfig {
    /// Resolves the configured business window, defaulting bad time strings.
    pub fn business_window(&self) -> BusinessWindow {
        let default = BusinessWindow::default();
        BusinessWindow {
            start: NaiveTime::parse_from_str(&self.workday_start, "%H:%M:%S").unwrap_or(default.start),
            end: NaiveTime::parse_from_str(&self.workday_end, "%H:%M:%S").unwrap_or(default.end),
        }
    }

    /// Resolves the configured requirement as a duration.
    pub fn requirement(&self) -> Duration {
        Duration::hours(self.required_hours)
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

impl Config {
    /// Loads the configuration file, or defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Returns the effective schedule, falling back to the defaults.
    pub fn schedule(&self) -> ScheduleConfig {
        self.schedule.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are pre-filled as defaults so re-running the wizard
    /// only changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.schedule();

        msg_print!(Message::ConfigModuleSchedule);
        config.schedule = Some(ScheduleConfig {
            workday_start: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkdayStart.to_string())
                .default(default.workday_start)
                .interact_text()?,
            workday_end: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkdayEnd.to_string())
                .default(default.workday_end)
                .interact_text()?,
            required_hours: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRequiredHours.to_string())
                .default(default.required_hours)
                .interact_text()?,
        });

        Ok(config)
    }
}

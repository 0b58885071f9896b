//! Verbatim storage of the raw punch-log blob.
//!
//! The only artifact the application persists is the raw input text itself,
//! cached under one fixed file in the data directory and restored verbatim
//! on the next run. The blob is stored opaquely; nothing here interprets it
//! beyond handing it back to the parser.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::fs;

/// Fixed file name of the cached punch-log blob.
pub const RAW_LOG_FILE_NAME: &str = "punches.log";

pub struct RawLog {
    storage: DataStorage,
}

impl RawLog {
    pub fn new() -> Self {
        Self { storage: DataStorage::new() }
    }

    /// Stores the raw punch-log text verbatim, replacing any previous blob.
    pub fn save(&self, text: &str) -> Result<()> {
        let path = self.storage.get_path(RAW_LOG_FILE_NAME)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Restores the cached blob verbatim, or `None` if nothing was saved yet.
    pub fn load(&self) -> Result<Option<String>> {
        let path = self.storage.get_path(RAW_LOG_FILE_NAME)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }
}

impl Default for RawLog {
    fn default() -> Self {
        Self::new()
    }
}

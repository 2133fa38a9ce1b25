//! JSON state persistence.
//!
//! The persisted record is the [`ProgressTracker`] itself: four fields, with
//! the deadline as an ISO-8601 date string. Load is infallible -- an absent or
//! unparsable file yields the defaults rather than an error. Save goes
//! through a sibling temp file and a rename so a crash mid-write cannot leave
//! a half-written record for the next load.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::progress::ProgressTracker;

const STATE_FILE_NAME: &str = "state.json";

/// Handle to the on-disk state record.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// State file at the standard location, `data_dir()/state.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn default_location() -> Result<Self, StoreError> {
        Ok(Self {
            path: super::data_dir()?.join(STATE_FILE_NAME),
        })
    }

    /// State file at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record, or defaults if the file is missing or does
    /// not parse. Corruption is not surfaced -- the tracker simply starts
    /// over, matching a first run.
    pub fn load(&self, today: NaiveDate) -> ProgressTracker {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content)
                .unwrap_or_else(|_| ProgressTracker::new(today)),
            Err(_) => ProgressTracker::new(today),
        }
    }

    /// Persist the record.
    ///
    /// Writes to `<path>.tmp` and renames into place. Any failure is fatal to
    /// the caller's exit path and must not be reported as a clean exit.
    ///
    /// # Errors
    /// Returns an error if serialization, the write, or the rename fails.
    pub fn save(&self, tracker: &ProgressTracker) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tracker)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|source| StoreError::SaveFailed {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::SaveFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

//! Core error types for lectern-core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lectern-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors (recovered at the prompt, never fatal)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// State store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised by [`crate::ProgressTracker`] mutations.
///
/// The messages are shown verbatim at the prompt, so they are phrased for
/// the user rather than for a log file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Goal must be at least 1
    #[error("Lecture goal must be a positive whole number!")]
    GoalNotPositive,

    /// Goal below what is already done
    #[error("Lecture goal cannot be LESS than the {completed} lectures completed so far!")]
    GoalBelowCompleted { completed: u32 },

    /// Goal equal to what is already done
    #[error("Lecture goal cannot be EQUAL to the amount of lectures completed so far!")]
    GoalEqualsCompleted,

    /// Streaks start from a clean slate only
    #[error("You can only start a streak from scratch! (starting from zero lectures completed)")]
    StreakStartMidProgress { completed: u32 },
}

/// State-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to write the state file
    #[error("Failed to save state to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to resolve or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the state record
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

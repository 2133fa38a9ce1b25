//! # Lectern Core Library
//!
//! Core business logic for Lectern, a terminal lecture-progress tracker.
//! The interactive surface lives in the `lectern-cli` crate; this crate is
//! UI-free and clock-free so every rule is unit-testable.
//!
//! ## Key Components
//!
//! - [`ProgressTracker`]: the four-field progress model and its mutation rules
//! - [`streak`]: the pure streak-lapse decision
//! - [`StateFile`]: JSON persistence with defaults-on-corruption load and
//!   atomic save
//!
//! Date-dependent operations take `today: NaiveDate` from the caller instead
//! of reading the system clock, which is what makes the streak rules testable
//! without waiting for midnight.

pub mod error;
pub mod progress;
pub mod storage;
pub mod streak;

pub use error::{CoreError, StoreError, ValidationError};
pub use progress::{ProgressTracker, STREAK_GRACE_DAYS};
pub use storage::StateFile;

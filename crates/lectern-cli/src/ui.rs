//! Terminal presentation glue.
//!
//! Everything here is a pure function of the model (plus a handful of
//! escape-code side effects for clearing and cursor control). No state.

use std::io;

use colored::{ColoredString, Colorize};
use crossterm::{cursor, execute, terminal};
use indoc::formatdoc;
use lectern_core::ProgressTracker;

use crate::command::Command;

const BAR_CELLS: usize = 20;

pub fn clear_screen() {
    let _ = execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
}

pub fn hide_cursor() {
    let _ = execute!(io::stdout(), cursor::Hide);
}

pub fn show_cursor() {
    let _ = execute!(io::stdout(), cursor::Show);
}

pub fn intro() {
    println!("{}", "Lectern".bright_blue());
    println!("{}", "-------".bright_white());
}

/// Paint by completion band: green from 80 %, yellow from 50 %, orange from
/// 20 %, red below.
fn paint(text: &str, percent: f64) -> ColoredString {
    if percent >= 80.0 {
        text.bright_green()
    } else if percent >= 50.0 {
        text.yellow()
    } else if percent >= 20.0 {
        text.truecolor(255, 135, 0)
    } else {
        text.bright_red()
    }
}

/// A 20-cell bar like `[████----------------] 20.0%`.
pub fn progress_bar(tracker: &ProgressTracker) -> String {
    let percent = tracker.percent_complete();
    let filled = if tracker.goal() == 0 {
        0
    } else {
        (BAR_CELLS as u64 * tracker.completed() as u64 / tracker.goal() as u64) as usize
    };
    let filled = filled.min(BAR_CELLS);

    let done = paint(&"\u{2588}".repeat(filled), percent);
    let todo = "-".repeat(BAR_CELLS - filled).bright_red();
    let label = format!("{percent:.1}%").bright_black();
    format!("[{done}{todo}] {label}")
}

pub fn lecture_noun(count: u32) -> &'static str {
    if count == 1 {
        "Lecture"
    } else {
        "Lectures"
    }
}

/// The menu block, ending with the `> ` prompt (no trailing newline).
pub fn menu(tracker: &ProgressTracker) -> String {
    let next = tracker.completed() + 1;
    let toggle = if tracker.streak_mode() {
        format!(
            "({}) \u{274c} turn off streak counting mode",
            Command::StreakOff.token().bright_blue()
        )
    } else {
        format!(
            "({}) \u{2705} turn on streak counting mode",
            Command::StreakOn.token().bright_blue()
        )
    };
    let completed_line = if tracker.streak_mode() {
        format!("Lecture Streak {next} ({})ompleted?", "c".bright_green())
    } else {
        format!("Lecture {next} ({})ompleted?", "c".bright_green())
    };

    formatdoc! {"

        Your Progress: {bar}

        {goal_line}

        ({d}) decrement lecture counter
        ({rlc}) reset lecture counter
        ({rgc}) reset lecture goal
        {toggle}
        ({full_reset}) reset lecture counter, goal and mode
        ({e}) save and exit

        {completed_line}

        > ",
        bar = progress_bar(tracker),
        goal_line = format!(
            "Goal To Complete {} {}",
            tracker.goal().to_string().bright_magenta().italic(),
            lecture_noun(tracker.goal()).italic()
        ),
        d = Command::Decrement.token().black(),
        rlc = Command::ResetCompleted.token().bright_cyan(),
        rgc = Command::ResetGoal.token().yellow(),
        full_reset = Command::FullReset.token().bright_red(),
        e = Command::SaveExit.token().magenta(),
    }
}

/// Re-prompt line for an unrecognized token, listing what applies right now.
pub fn invalid_options(streak_mode: bool) -> String {
    let listed = Command::listed(streak_mode);
    let (last, head) = listed.split_last().expect("listing is never empty");
    let head = head.iter().map(|c| c.token()).collect::<Vec<_>>().join(", ");
    format!("Please enter a valid option: {head}, or {}.", last.token())
        .red()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tracker(goal: u32, completed: u32) -> ProgressTracker {
        let today: NaiveDate = "2026-03-01".parse().unwrap();
        let mut t = ProgressTracker::new(today);
        if goal > 0 {
            t.set_goal(goal).unwrap();
        }
        for _ in 0..completed {
            t.increment(today);
        }
        t
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn bar_shows_percentage_and_fill() {
        plain();
        let bar = progress_bar(&tracker(4, 2));
        assert!(bar.contains("50.0%"), "bar: {bar}");
        assert!(bar.contains(&"\u{2588}".repeat(10)), "bar: {bar}");
        assert!(!bar.contains(&"\u{2588}".repeat(11)), "bar: {bar}");
    }

    #[test]
    fn empty_goal_renders_an_empty_bar() {
        plain();
        let bar = progress_bar(&tracker(0, 0));
        assert!(bar.contains("0.0%"));
        assert!(!bar.contains('\u{2588}'));
    }

    #[test]
    fn menu_offers_the_applicable_streak_toggle() {
        plain();
        let off = menu(&tracker(3, 0));
        assert!(off.contains("tosm"));
        assert!(!off.contains("tfsm"));
        assert!(off.contains("Lecture 1 ("));

        let today: NaiveDate = "2026-03-01".parse().unwrap();
        let mut t = tracker(3, 0);
        t.enable_streak(today).unwrap();
        let on = menu(&t);
        assert!(on.contains("tfsm"));
        assert!(!on.contains("tosm"));
        assert!(on.contains("Lecture Streak 1 ("));
    }

    #[test]
    fn invalid_options_listing_matches_mode() {
        plain();
        let on = invalid_options(true);
        assert!(on.contains("tfsm") && !on.contains("tosm"));
        assert!(on.ends_with("or e."));

        let off = invalid_options(false);
        assert!(off.contains("tosm") && !off.contains("tfsm"));
    }

    #[test]
    fn noun_pluralizes() {
        assert_eq!(lecture_noun(1), "Lecture");
        assert_eq!(lecture_noun(0), "Lectures");
        assert_eq!(lecture_noun(7), "Lectures");
    }
}

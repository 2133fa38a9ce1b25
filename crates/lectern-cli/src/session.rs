//! The interactive session.
//!
//! One state machine drives the whole program:
//!
//! ```text
//! NeedsGoal -> MenuLoop -> Exit (save-and-exit | goal met)
//! ```
//!
//! The menu loop owns the only concurrency-shaped behavior in the system:
//! while waiting for a command under streak mode, the wall-clock deadline and
//! the keyboard race each other on a bounded poll cadence. The deadline is
//! checked first on every tick, so a lapse is never masked by input arriving
//! in the same tick.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use colored::Colorize;
use tracing::debug;

use lectern_core::{CoreError, ProgressTracker, StateFile};

use crate::command::Command;
use crate::input::{InputSource, POLL_INTERVAL};
use crate::ui;

/// How long the final progress bar stays on screen after the goal is met.
const GOAL_MET_PAUSE: Duration = Duration::from_secs(3);

/// Today-provider seam, so tests can replay any calendar they like.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The real calendar.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// How a session ended. Both variants mean state was persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Explicit save-and-exit.
    Saved,
    /// The goal was reached; a reset record was persisted.
    GoalMet,
}

/// What a menu prompt produced.
enum Prompted {
    Token(String),
    /// The deadline won the race; no input was collected.
    StreakLapsed,
}

/// The interactive session controller. Owns the tracker for its lifetime;
/// the caller supplies the store and collects the outcome.
pub struct Session<I: InputSource, C: Clock> {
    tracker: ProgressTracker,
    input: I,
    clock: C,
}

impl<I: InputSource, C: Clock> Session<I, C> {
    pub fn new(tracker: ProgressTracker, input: I, clock: C) -> Self {
        Self {
            tracker,
            input,
            clock,
        }
    }

    /// Drive the session to completion.
    ///
    /// # Errors
    /// Input errors and save failures propagate; a failed save on an exit
    /// path must end the process with a non-zero code.
    pub fn run(&mut self, store: &StateFile) -> Result<Outcome, CoreError> {
        ui::clear_screen();
        loop {
            if self.tracker.goal() == 0 {
                // The menu is never entered without a goal.
                self.prompt_goal()?;
            }
            if let Some(outcome) = self.menu_loop(store)? {
                return Ok(outcome);
            }
            // Goal was reset; back to goal entry.
        }
    }

    // ── NeedsGoal ────────────────────────────────────────────────────

    fn prompt_goal(&mut self) -> Result<(), CoreError> {
        loop {
            ui::show_cursor();
            print!("Enter amount of lectures to complete: ");
            io::stdout().flush()?;
            let line = self.input.read_line()?;
            ui::clear_screen();
            ui::hide_cursor();

            let goal = match line.trim().parse::<u32>() {
                Ok(n) => n,
                Err(_) => {
                    println!("{}", "Total lectures amount must be a valid integer!".red());
                    continue;
                }
            };
            match self.tracker.set_goal(goal) {
                Ok(()) => {
                    debug!(goal, "goal set");
                    return Ok(());
                }
                Err(e) => println!("{}", e.to_string().red()),
            }
        }
    }

    // ── MenuLoop ─────────────────────────────────────────────────────

    /// Run menu commands until the session ends (`Some(outcome)`) or the goal
    /// is dropped and control returns to goal entry (`None`).
    fn menu_loop(&mut self, store: &StateFile) -> Result<Option<Outcome>, CoreError> {
        loop {
            let command = self.next_command()?;
            debug!(command = command.token(), "dispatching");
            match command {
                Command::Decrement => self.tracker.decrement(),
                Command::ResetCompleted => self.tracker.reset_completed(),
                Command::ResetGoal => {
                    self.tracker.reset_goal();
                    return Ok(None);
                }
                Command::StreakOn => {
                    if let Err(e) = self.tracker.enable_streak(self.clock.today()) {
                        println!("{}", e.to_string().red());
                    }
                }
                Command::StreakOff => {
                    if self.tracker.streak_mode() {
                        self.tracker.disable_streak();
                        println!("\"You broke out of streak mode!\"");
                    } else {
                        println!("{}", "Streak mode is not on.".red());
                    }
                }
                Command::FullReset => {
                    if self.confirm_full_reset()? {
                        return Ok(None);
                    }
                }
                Command::Complete => {
                    self.tracker.increment(self.clock.today());
                    if self.tracker.is_goal_met() {
                        self.finish_goal_met(store)?;
                        return Ok(Some(Outcome::GoalMet));
                    }
                }
                Command::SaveExit => {
                    store.save(&self.tracker)?;
                    debug!("state saved, exiting");
                    return Ok(Some(Outcome::Saved));
                }
            }
        }
    }

    /// Show the menu until a recognized command is submitted. Handles the
    /// lapse flow and the unrecognized-token re-prompt.
    fn next_command(&mut self) -> Result<Command, CoreError> {
        loop {
            ui::show_cursor();
            ui::intro();
            if self.tracker.streak_lapsed(self.clock.today()) {
                self.acknowledge_streak_lapse()?;
                continue;
            }
            if self.tracker.streak_mode() && self.tracker.completed() == 1 {
                println!("\"You're on base streak 1!\"");
            }

            let prompted = self.prompt_menu()?;
            ui::clear_screen();
            ui::hide_cursor();
            match prompted {
                Prompted::StreakLapsed => continue,
                Prompted::Token(token) => {
                    let token = token.trim().to_lowercase();
                    match Command::parse(&token) {
                        Some(command) => return Ok(command),
                        None => println!("{}", ui::invalid_options(self.tracker.streak_mode())),
                    }
                }
            }
        }
    }

    /// Print the menu and wait for a line. Under streak mode this is the
    /// deadline-vs-keyboard race; otherwise a plain blocking read.
    fn prompt_menu(&mut self) -> Result<Prompted, CoreError> {
        print!("{}", ui::menu(&self.tracker));
        io::stdout().flush()?;

        if !self.tracker.streak_mode() {
            return Ok(Prompted::Token(self.input.read_line()?));
        }

        loop {
            // Deadline first, every tick.
            if self.tracker.streak_lapsed(self.clock.today()) {
                self.input.discard_pending();
                debug!("streak lapsed while waiting for input");
                return Ok(Prompted::StreakLapsed);
            }
            if let Some(line) = self.input.poll_line(POLL_INTERVAL)? {
                return Ok(Prompted::Token(line));
            }
        }
    }

    // ── Sub-flows ────────────────────────────────────────────────────

    /// Blocking acknowledgment of a lapsed streak, then the progress reset.
    fn acknowledge_streak_lapse(&mut self) -> Result<(), CoreError> {
        debug!("streak lapsed, awaiting acknowledgment");
        loop {
            print!(
                "\u{274c} You missed a day! Your streak has restarted \u{1f623}. ({}) proceed: ",
                "p".bright_black()
            );
            io::stdout().flush()?;
            let ack = self.input.read_line()?;
            ui::clear_screen();
            if ack.trim().eq_ignore_ascii_case("p") {
                break;
            }
        }
        self.tracker.reset_completed();
        Ok(())
    }

    fn confirm_full_reset(&mut self) -> Result<bool, CoreError> {
        loop {
            ui::show_cursor();
            print!(
                "Are you sure you want to reset everything? ({}) or ({}): ",
                "y".bright_green(),
                "n".bright_red()
            );
            io::stdout().flush()?;
            let answer = self.input.read_line()?;
            ui::clear_screen();
            match answer.trim().to_lowercase().as_str() {
                "y" => {
                    self.tracker.full_reset();
                    return Ok(true);
                }
                "n" => return Ok(false),
                _ => continue,
            }
        }
    }

    /// The goal is met: celebrate, reset, persist, terminate.
    fn finish_goal_met(&mut self, store: &StateFile) -> Result<(), CoreError> {
        println!("Your Progress: {}", ui::progress_bar(&self.tracker));
        std::thread::sleep(GOAL_MET_PAUSE);
        ui::clear_screen();

        let goal = self.tracker.goal();
        if goal == 1 {
            println!("Congrats on completing 1 lecture \u{1f973}!");
        } else {
            println!("Congrats on completing all {goal} of your lectures \u{1f973}!");
        }

        self.tracker.full_reset();
        store.save(&self.tracker)?;
        debug!("goal met, reset state saved");
        Ok(())
    }
}

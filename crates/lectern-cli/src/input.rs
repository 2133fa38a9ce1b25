//! Input sources.
//!
//! The session only needs one capability from the platform: "give me the next
//! submitted line, or tell me nothing arrived within an interval". That seam
//! is the [`InputSource`] trait; [`TerminalInput`] is the real backend, and
//! the session tests script their own.
//!
//! The polled path runs the terminal in raw mode and collects keystrokes one
//! at a time (echoed manually, Backspace edits, Enter submits). Submission
//! happens at Enter, so a streak lapse that fires mid-typing wins the race
//! and the partial token is discarded.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// How long each poll tick waits for a keystroke before the deadline is
/// rechecked. Bounded sleep inside `event::poll` -- no busy spin.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Capability seam for user input.
pub trait InputSource {
    /// Ordinary blocking read of one line (trailing newline included or not;
    /// callers normalize).
    fn read_line(&mut self) -> io::Result<String>;

    /// Wait up to `wait` for a completed line. `Ok(None)` means no line was
    /// submitted within the interval; partially typed input is retained for
    /// the next call.
    fn poll_line(&mut self, wait: Duration) -> io::Result<Option<String>>;

    /// Drop any partially typed, unsubmitted input.
    fn discard_pending(&mut self);
}

/// Crossterm-backed input on the controlling terminal.
///
/// Raw mode is entered lazily on the first poll, held across ticks (toggling
/// it 20 times a second would flicker), and released on submit, discard, and
/// drop.
pub struct TerminalInput {
    pending: String,
    raw_active: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            pending: String::new(),
            raw_active: false,
        }
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        if !self.raw_active {
            enable_raw_mode()?;
            self.raw_active = true;
        }
        Ok(())
    }

    fn leave_raw(&mut self) {
        if self.raw_active {
            let _ = disable_raw_mode();
            self.raw_active = false;
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        self.leave_raw();
    }
}

impl InputSource for TerminalInput {
    fn read_line(&mut self) -> io::Result<String> {
        self.leave_raw();
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line)
    }

    fn poll_line(&mut self, wait: Duration) -> io::Result<Option<String>> {
        self.enter_raw()?;
        if !event::poll(wait)? {
            return Ok(None);
        }

        // Something is ready: drain every queued event without waiting more.
        let mut out = io::stdout();
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    match key.code {
                        KeyCode::Enter => {
                            let line = std::mem::take(&mut self.pending);
                            write!(out, "\r\n")?;
                            out.flush()?;
                            self.leave_raw();
                            return Ok(Some(line));
                        }
                        KeyCode::Backspace => {
                            if self.pending.pop().is_some() {
                                write!(out, "\u{8} \u{8}")?;
                                out.flush()?;
                            }
                        }
                        KeyCode::Char('c')
                            if key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            // Raw mode swallows SIGINT; surface it as an error
                            // so the session unwinds without saving.
                            self.leave_raw();
                            return Err(io::Error::new(
                                io::ErrorKind::Interrupted,
                                "interrupted",
                            ));
                        }
                        KeyCode::Char(c) => {
                            self.pending.push(c);
                            write!(out, "{c}")?;
                            out.flush()?;
                        }
                        _ => {}
                    }
                }
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(None);
            }
        }
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
        self.leave_raw();
    }
}

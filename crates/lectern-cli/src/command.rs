//! Menu command tokens.

/// A recognized menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `d` -- take one completed lecture back
    Decrement,
    /// `rlc` -- reset the lecture counter
    ResetCompleted,
    /// `rgc` -- reset the goal (back to goal entry)
    ResetGoal,
    /// `tosm` -- turn on streak-based counting
    StreakOn,
    /// `tfsm` -- turn off streak-based counting
    StreakOff,
    /// `full_reset` -- counter, goal and mode back to defaults
    FullReset,
    /// `c` -- one lecture completed
    Complete,
    /// `e` -- save and exit
    SaveExit,
}

impl Command {
    /// Parse a normalized (trimmed, lowercased) token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "d" => Some(Self::Decrement),
            "rlc" => Some(Self::ResetCompleted),
            "rgc" => Some(Self::ResetGoal),
            "tosm" => Some(Self::StreakOn),
            "tfsm" => Some(Self::StreakOff),
            "full_reset" => Some(Self::FullReset),
            "c" => Some(Self::Complete),
            "e" => Some(Self::SaveExit),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Decrement => "d",
            Self::ResetCompleted => "rlc",
            Self::ResetGoal => "rgc",
            Self::StreakOn => "tosm",
            Self::StreakOff => "tfsm",
            Self::FullReset => "full_reset",
            Self::Complete => "c",
            Self::SaveExit => "e",
        }
    }

    /// The commands worth offering right now: whichever streak toggle does
    /// not apply to the current mode is left out.
    pub fn listed(streak_mode: bool) -> Vec<Self> {
        let skip = if streak_mode {
            Self::StreakOn
        } else {
            Self::StreakOff
        };
        [
            Self::Decrement,
            Self::ResetCompleted,
            Self::ResetGoal,
            Self::StreakOn,
            Self::StreakOff,
            Self::FullReset,
            Self::Complete,
            Self::SaveExit,
        ]
        .into_iter()
        .filter(|c| *c != skip)
        .collect()
    }
}

//! Timer mode: a work session or a break

use std::fmt;

use crate::duration::SECONDS_PER_MINUTE;

/// Which kind of session the timer is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Focus session (`pomo [duration]`)
    Work,
    /// Break session (`pomo rest [duration]`)
    Rest,
}

impl Mode {
    /// Duration used when no token is given on the command line
    pub fn default_seconds(&self) -> i64 {
        match self {
            Mode::Work => 45 * SECONDS_PER_MINUTE,
            Mode::Rest => 15 * SECONDS_PER_MINUTE,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mode::Work => "🍅",
            Mode::Rest => "☕",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Work => "Pomodoro Timer",
            Mode::Rest => "Break Timer",
        }
    }

    /// Noun used in the completion line
    pub fn session_name(&self) -> &'static str {
        match self {
            Mode::Work => "Pomodoro",
            Mode::Rest => "Break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Work => write!(f, "work"),
            Mode::Rest => write!(f, "rest"),
        }
    }
}

//! Countdown timer state and transitions

use crate::error::DurationError;

use super::Mode;

/// Observable status of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Running,
    Paused,
    Completed,
}

/// Result of feeding one tick to a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was taken off the remaining time
    Ticked,
    /// The timer is paused, nothing changed
    Paused,
    /// The timer is at zero
    Completed,
}

/// Countdown state for a single work or break session.
///
/// `total_seconds` is fixed at construction and `remaining_seconds` only ever
/// moves down, one second per tick, until it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    total_seconds: i64,
    remaining_seconds: i64,
    mode: Mode,
    paused: bool,
}

impl Timer {
    /// Create a timer for `total_seconds`.
    ///
    /// Negative totals are rejected; `token` is only used for the error message.
    pub fn new(mode: Mode, total_seconds: i64, token: &str) -> Result<Self, DurationError> {
        if total_seconds < 0 {
            return Err(DurationError::Negative {
                token: token.to_string(),
            });
        }

        Ok(Self {
            total_seconds,
            remaining_seconds: total_seconds,
            mode,
            paused: false,
        })
    }

    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.total_seconds - self.remaining_seconds
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_rest(&self) -> bool {
        self.mode == Mode::Rest
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_seconds <= 0
    }

    pub fn status(&self) -> TimerStatus {
        if self.is_completed() {
            TimerStatus::Completed
        } else if self.paused {
            TimerStatus::Paused
        } else {
            TimerStatus::Running
        }
    }

    /// Share of the session already elapsed, in percent (0.0 to 100.0)
    pub fn percentage(&self) -> f64 {
        if self.total_seconds == 0 {
            return 100.0;
        }
        self.elapsed_seconds() as f64 / self.total_seconds as f64 * 100.0
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        match self.status() {
            TimerStatus::Completed => TickOutcome::Completed,
            TimerStatus::Paused => TickOutcome::Paused,
            TimerStatus::Running => {
                self.remaining_seconds -= 1;
                if self.is_completed() {
                    TickOutcome::Completed
                } else {
                    TickOutcome::Ticked
                }
            }
        }
    }

    /// Flip between paused and running; returns the new paused flag.
    ///
    /// A completed timer stays as it is.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.is_completed() {
            self.paused = !self.paused;
        }
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(total: i64) -> Timer {
        Timer::new(Mode::Work, total, "test").unwrap()
    }

    #[test]
    fn new_timer_is_running_and_full() {
        let t = timer(90);
        assert_eq!(t.total_seconds(), 90);
        assert_eq!(t.remaining_seconds(), 90);
        assert_eq!(t.status(), TimerStatus::Running);
        assert_eq!(t.percentage(), 0.0);
        assert!(!t.is_rest());
    }

    #[test]
    fn negative_total_is_rejected() {
        let err = Timer::new(Mode::Rest, -300, "-5m").unwrap_err();
        assert_eq!(
            err,
            DurationError::Negative {
                token: "-5m".to_string()
            }
        );
    }

    #[test]
    fn zero_total_is_already_complete() {
        let mut t = timer(0);
        assert_eq!(t.status(), TimerStatus::Completed);
        assert_eq!(t.percentage(), 100.0);
        assert_eq!(t.tick(), TickOutcome::Completed);
        assert_eq!(t.remaining_seconds(), 0);
    }

    #[test]
    fn tick_counts_down_to_completion() {
        let mut t = timer(3);
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.remaining_seconds(), 1);
        assert_eq!(t.tick(), TickOutcome::Completed);
        assert_eq!(t.remaining_seconds(), 0);

        // Terminal: further ticks never go below zero
        assert_eq!(t.tick(), TickOutcome::Completed);
        assert_eq!(t.remaining_seconds(), 0);
        assert_eq!(t.total_seconds(), 3);
    }

    #[test]
    fn pause_freezes_remaining() {
        let mut t = timer(10);
        t.tick();
        assert!(t.toggle_pause());
        assert_eq!(t.status(), TimerStatus::Paused);
        assert_eq!(t.tick(), TickOutcome::Paused);
        assert_eq!(t.tick(), TickOutcome::Paused);
        assert_eq!(t.remaining_seconds(), 9);

        assert!(!t.toggle_pause());
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.remaining_seconds(), 8);
    }

    #[test]
    fn completed_timer_ignores_pause() {
        let mut t = timer(1);
        t.tick();
        assert!(!t.toggle_pause());
        assert_eq!(t.status(), TimerStatus::Completed);
    }

    #[test]
    fn percentage_tracks_elapsed() {
        let mut t = timer(4);
        t.tick();
        assert_eq!(t.percentage(), 25.0);
        t.tick();
        assert_eq!(t.percentage(), 50.0);
    }
}

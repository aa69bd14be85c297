//! Timer state module
//!
//! This module contains the countdown model and the work/break mode.

pub mod mode;
pub mod timer_state;

// Re-export main types
pub use mode::Mode;
pub use timer_state::{TickOutcome, Timer, TimerStatus};

//! Background tasks module
//!
//! This module contains the countdown loop and the keyboard reader that feeds it.

pub mod countdown;
pub mod input;

// Re-export main functions
pub use countdown::{countdown_task, CountdownOutcome};
pub use input::{parse_control, spawn_input_reader, Control};

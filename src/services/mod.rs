//! External service module
//!
//! This module talks to programs outside the timer, currently the desktop notifier.

pub mod notifier;

// Re-export main functions
pub use notifier::*;

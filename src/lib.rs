//! Pomo - A command-line Pomodoro countdown timer
//!
//! This library parses duration tokens, counts a work or break session down
//! once per second with a progress bar, and sends a desktop notification
//! when the session is over.

pub mod config;
pub mod duration;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use duration::parse_duration;
pub use error::DurationError;
pub use render::{format_time, progress_bar, Display};
pub use state::{Mode, Timer};
pub use tasks::{countdown_task, CountdownOutcome};
pub use utils::signals::shutdown_signal;

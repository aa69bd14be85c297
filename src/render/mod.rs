//! Countdown rendering module
//!
//! Pure string formatting lives in `format`; `display` writes frames to the terminal.

pub mod display;
pub mod format;

// Re-export main items
pub use display::Display;
pub use format::{format_time, progress_bar};

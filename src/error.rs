//! Error types

use thiserror::Error;

/// Errors produced while turning a command-line token into a timer duration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The numeric part of the token is not a valid integer
    #[error("invalid duration: {token:?} is not of the form <integer>[s|m]")]
    InvalidFormat { token: String },

    /// The token parsed, but a countdown cannot run backwards
    #[error("invalid duration: {token} is negative")]
    Negative { token: String },

    /// The scaled value does not fit in a signed 64-bit second count
    #[error("invalid duration: {token} is too large")]
    Overflow { token: String },
}

//! Duration token parsing

use crate::error::DurationError;

pub const SECONDS_PER_MINUTE: i64 = 60;

/// Parse a token like `30m`, `45s` or `25` into a signed number of seconds.
///
/// A trailing `m` selects minutes and a trailing `s` selects seconds; with no
/// marker the value is read as minutes. Negative values parse successfully,
/// it is up to the caller to decide whether they make sense.
pub fn parse_duration(token: &str) -> Result<i64, DurationError> {
    let (number, unit) = if let Some(number) = token.strip_suffix('m') {
        (number, SECONDS_PER_MINUTE)
    } else if let Some(number) = token.strip_suffix('s') {
        (number, 1)
    } else {
        (token, SECONDS_PER_MINUTE)
    };

    let value: i64 = number.parse().map_err(|_| DurationError::InvalidFormat {
        token: token.to_string(),
    })?;

    value.checked_mul(unit).ok_or_else(|| DurationError::Overflow {
        token: token.to_string(),
    })
}

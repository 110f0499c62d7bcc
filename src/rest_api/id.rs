//! Path identifier parsing

use super::errors::{RestError, RestResult};

/// Parses a primary key taken from a URL path.
///
/// Only plain decimal digits are accepted: no sign, no decimal point, no
/// surrounding text. Zero and values past `i64::MAX` are rejected.
pub fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}

/// `parse_id` for handlers: 400 on anything invalid
pub fn require_id(raw: &str) -> RestResult<i64> {
    parse_id(raw).ok_or(RestError::InvalidId)
}

// Duration parsing for tracked time entries

use crate::error::HtError;
use crate::models::TrackedDuration;

/// Parse a duration expression such as `2h30m`, `2h` or `45m`
///
/// Only unsigned decimal integers are accepted, with the hours part (if any)
/// before the minutes part. Minutes above 59 carry into hours.
pub fn parse_duration(expr: &str) -> Result<TrackedDuration, HtError> {
    let (hours_part, rest) = match expr.split_once('h') {
        Some((hours, rest)) => (Some(hours), rest),
        None => (None, expr),
    };

    let minutes_part = if rest.is_empty() {
        None
    } else {
        match rest.strip_suffix('m') {
            Some(minutes) => Some(minutes),
            None => return Err(HtError::DurationFormat),
        }
    };

    if hours_part.is_none() && minutes_part.is_none() {
        return Err(HtError::DurationFormat);
    }

    let hours = hours_part.map(parse_component).transpose()?.unwrap_or(0);
    let minutes = minutes_part.map(parse_component).transpose()?.unwrap_or(0);

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .map(TrackedDuration::from_secs)
        .ok_or(HtError::DurationFormat)
}

fn parse_component(digits: &str) -> Result<u64, HtError> {
    // u64::from_str would accept a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HtError::DurationFormat);
    }
    digits.parse::<u64>().map_err(|_| HtError::DurationFormat)
}

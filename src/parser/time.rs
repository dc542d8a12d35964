//! Resolution of a partial textual time of day.

use chrono::NaiveTime;

use crate::error::{FormatError, Result};
use crate::schedule::end_of_day;

/// Resolve `H`, `H:MM` or `H:MM:SS` (fields 1-2 digits) to a concrete time.
///
/// Omitted fields fill with 59 when `adjust_to_end` (the value closes a
/// range) and with 0 otherwise. A bare hour of 24 always resolves to
/// 23:59:59, regardless of the flag.
pub(crate) fn resolve(text: &str, adjust_to_end: bool) -> Result<NaiveTime> {
    let caps = regex!(r"^(\d{1,2})(?::(\d{1,2})(?::(\d{1,2}))?)?$")
        .captures(text)
        .ok_or_else(|| FormatError::InvalidTime(text.to_owned()))?;

    let hour: u32 = field(&caps[1], text)?;
    let minute = caps.get(2).map(|m| field(m.as_str(), text)).transpose()?;
    let second = caps.get(3).map(|m| field(m.as_str(), text)).transpose()?;

    let resolved = match (minute, second) {
        (Some(minute), Some(second)) => NaiveTime::from_hms_opt(hour, minute, second),
        (Some(minute), None) if adjust_to_end => NaiveTime::from_hms_opt(hour, minute, 59),
        (Some(minute), None) => NaiveTime::from_hms_opt(hour, minute, 0),
        (None, _) if hour == 24 => Some(end_of_day()),
        (None, _) if adjust_to_end => NaiveTime::from_hms_opt(hour, 59, 59),
        (None, _) => NaiveTime::from_hms_opt(hour, 0, 0),
    };

    resolved.ok_or_else(|| FormatError::TimeOutOfRange(text.to_owned()))
}

fn field(digits: &str, clause: &str) -> Result<u32> {
    digits.parse().map_err(|_| FormatError::InvalidTime(clause.to_owned()))
}

//! Resolution of a weekday selector into a [`WeekdaySet`].

use crate::api::Options;
use crate::error::{FormatError, Result};
use crate::weekday::WeekdaySet;

const END_OF_WEEK: u8 = 6;

/// Resolve a comma-joined selector list into the union of its parts.
///
/// An empty sub-selector covers all seven days, so an empty selector string
/// does too.
pub(crate) fn resolve_selector(text: &str, options: &Options) -> Result<WeekdaySet> {
    let mut days = WeekdaySet::empty();
    for part in text.split(options.list_separator) {
        days |= resolve_range(part, options)?;
    }
    Ok(days)
}

fn resolve_range(text: &str, options: &Options) -> Result<WeekdaySet> {
    if text.is_empty() {
        return Ok(WeekdaySet::all());
    }

    let parts: Vec<&str> = text.split(options.range_separator).collect();
    match parts.as_slice() {
        [name] => Ok(WeekdaySet::only(lookup(name, options)?)),
        [start, end] => {
            let start = lookup(start, options)?;
            let end = lookup(end, options)?;
            if start < end {
                Ok(WeekdaySet::span(start, end))
            } else {
                // Week-wrap; start == end also lands here and covers the
                // whole week.
                Ok(WeekdaySet::span(start, END_OF_WEEK) | WeekdaySet::span(0, end))
            }
        }
        _ => Err(FormatError::TooManySeparators {
            separator: options.range_separator,
            clause: text.to_owned(),
        }),
    }
}

fn lookup(name: &str, options: &Options) -> Result<u8> {
    options
        .weekday_names
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| index as u8)
        .ok_or_else(|| FormatError::UnknownWeekday(name.to_owned()))
}

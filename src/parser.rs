//! Statement splitting and entry assembly.
//!
//! Parsing one input is a fixed pipeline over plain string splits; the
//! submodules hold the leaf resolvers:
//!
//! ```text
//! input ── lines ── trim, drop blanks and "#" comments
//!                        │            (per line)
//!                        v
//!            rightmost action split ("=")
//!                        │
//!                        v
//!              entry split ("|")      (per entry)
//!                        │
//!            leftmost weekday split ("@")
//!               │                  │
//!               v                  v
//!     weekdays::resolve_selector   ranges::expand
//!        (weekdays.rs)                (ranges.rs)
//!               │                  │     └─ time::resolve (time.rs)
//!               └────── Entry ─────┘
//! ```
//!
//! Every entry of a line shares that line's action suffix; entries from all
//! lines concatenate in source order. The first failing clause aborts the
//! whole parse.

#[path = "parser/ranges.rs"]
mod ranges;
#[path = "parser/time.rs"]
mod time;
#[path = "parser/weekdays.rs"]
mod weekdays;

use crate::api::Options;
use crate::error::Result;
use crate::schedule::{Entry, Schedule};

const COMMENT_MARKER: char = '#';

pub(crate) fn parse_input(text: &str, options: &Options) -> Result<Schedule> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        parse_statement(line, options, &mut entries)?;
    }
    Ok(Schedule::new(entries))
}

fn parse_statement(line: &str, options: &Options, out: &mut Vec<Entry>) -> Result<()> {
    // Rightmost occurrence wins; everything after it is the action label.
    let (body, action) = match line.rsplit_once(options.action_separator) {
        Some((body, action)) => (body, Some(action)),
        None => (line, None),
    };

    for entry_text in body.split(options.entry_separator) {
        let (selector, ranges_text) = match entry_text.split_once(options.weekday_separator) {
            Some((selector, rest)) => (selector, rest),
            None => ("", entry_text),
        };

        let days = weekdays::resolve_selector(selector, options)?;
        let windows = ranges::expand(ranges_text, options)?;
        out.push(Entry::new(days, windows, action.map(str::to_owned)));
    }
    Ok(())
}

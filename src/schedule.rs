use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

use crate::weekday::WeekdaySet;

pub(crate) fn start_of_day() -> NaiveTime {
    NaiveTime::MIN
}

pub(crate) fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap()
}

/// A single non-wrapping span of the day, inclusive at both ends.
///
/// Ranges that cross midnight are split into two `TimeWindow`s before
/// construction, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    pub(crate) fn new(start: NaiveTime, end: NaiveTime) -> Self {
        debug_assert!(start <= end);
        TimeWindow { start, end }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Inclusive containment. Sub-second precision of the probe is ignored.
    pub fn contains(&self, at: NaiveTime) -> bool {
        let at = truncate_to_second(at);
        self.start <= at && at <= self.end
    }

    fn render(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M:%S"), self.end.format("%H:%M:%S"))
    }
}

fn truncate_to_second(at: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(at.hour(), at.minute(), at.second()).unwrap_or(at)
}

/// One parsed clause: the days it covers, the windows on those days, and an
/// optional action label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    days: WeekdaySet,
    windows: Vec<TimeWindow>,
    action: Option<String>,
}

impl Entry {
    pub(crate) fn new(days: WeekdaySet, windows: Vec<TimeWindow>, action: Option<String>) -> Self {
        Entry { days, windows, action }
    }

    pub fn days(&self) -> WeekdaySet {
        self.days
    }

    /// Windows in source order.
    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// True when the timestamp's weekday is covered and any window contains
    /// its time of day.
    pub fn matches(&self, at: NaiveDateTime) -> bool {
        self.days.contains_day(at.weekday()) && self.windows.iter().any(|w| w.contains(at.time()))
    }

    fn render(&self) -> String {
        let windows = self.windows.iter().map(TimeWindow::render).collect::<Vec<_>>().join(" | ");
        format!("{} - {}", self.days.abbreviations(), windows)
    }
}

/// An ordered collection of [`Entry`] values parsed from one input.
///
/// Entry order is source order; action lookup is first-match-wins. The value
/// is immutable after parsing, so queries can run from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    entries: Vec<Entry>,
}

impl Schedule {
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        Schedule { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when any entry matches the timestamp.
    pub fn matches(&self, at: NaiveDateTime) -> bool {
        self.entries.iter().any(|entry| entry.matches(at))
    }

    /// The action of the first matching entry, in source order.
    ///
    /// A matching entry without an action yields `None`; `default` is
    /// returned only when no entry matches at all.
    pub fn action_at<'a>(&'a self, at: NaiveDateTime, default: Option<&'a str>) -> Option<&'a str> {
        for entry in &self.entries {
            if entry.matches(at) {
                return entry.action();
            }
        }
        default
    }

    /// Diagnostic multi-line rendering. Not re-parseable input.
    pub fn render(&self) -> String {
        let mut out = String::from("Schedule:\n");
        for entry in &self.entries {
            out.push_str("  ");
            out.push_str(&entry.render());
            out.push('\n');
        }
        out.trim().to_string()
    }
}

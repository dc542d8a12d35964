//! Expansion of a time-range list into concrete windows.

use super::time;
use crate::api::Options;
use crate::error::{FormatError, Result};
use crate::schedule::{TimeWindow, end_of_day, start_of_day};

/// Expand a comma-joined range list into windows, in source order.
///
/// Concatenation, not set union: overlapping sub-ranges stay separate.
pub(crate) fn expand(text: &str, options: &Options) -> Result<Vec<TimeWindow>> {
    let mut windows = Vec::new();
    for part in text.split(options.list_separator) {
        expand_range(part, options, &mut windows)?;
    }
    Ok(windows)
}

fn expand_range(text: &str, options: &Options, out: &mut Vec<TimeWindow>) -> Result<()> {
    let parts: Vec<&str> = text.split(options.range_separator).collect();
    let (start, end) = match parts.as_slice() {
        [start, end] => {
            (time::resolve(start, false)?, time::resolve(end, options.hour_only_use_end)?)
        }
        [""] => (start_of_day(), end_of_day()),
        [value] => {
            let start = time::resolve(value, false)?;
            let end = time::resolve(value, true)?;
            if start == end {
                // Equal resolutions name a single instant; skip the wrap
                // check.
                out.push(TimeWindow::new(start, end));
                return Ok(());
            }
            (start, end)
        }
        _ => {
            return Err(FormatError::TooManySeparators {
                separator: options.range_separator,
                clause: text.to_owned(),
            });
        }
    };

    if start < end {
        out.push(TimeWindow::new(start, end));
    } else {
        // Crosses midnight: split around the day boundary.
        out.push(TimeWindow::new(start, end_of_day()));
        out.push(TimeWindow::new(start_of_day(), end));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    fn tod(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    fn window(start: (u32, u32, u32), end: (u32, u32, u32)) -> TimeWindow {
        TimeWindow::new(tod(start.0, start.1, start.2), tod(end.0, end.1, end.2))
    }

    fn with_policy(hour_only_use_end: bool) -> Options {
        Options { hour_only_use_end, ..Options::default() }
    }

    fn expand_end(text: &str) -> Vec<TimeWindow> {
        expand(text, &with_policy(true)).unwrap()
    }

    fn expand_not_end(text: &str) -> Vec<TimeWindow> {
        expand(text, &with_policy(false)).unwrap()
    }

    #[test]
    fn empty_text_is_the_whole_day() {
        let whole_day = vec![window((0, 0, 0), (23, 59, 59))];
        assert_eq!(expand_end(""), whole_day);
        assert_eq!(expand_not_end(""), whole_day);
    }

    #[test]
    fn bare_hour_covers_that_hour_under_both_policies() {
        let hour_three = vec![window((3, 0, 0), (3, 59, 59))];
        assert_eq!(expand_end("3"), hour_three);
        assert_eq!(expand_not_end("3"), hour_three);
    }

    #[test]
    fn bare_minute_value_covers_that_minute() {
        assert_eq!(expand_end("3:15"), vec![window((3, 15, 0), (3, 15, 59))]);
    }

    #[test]
    fn full_precision_value_is_a_single_instant() {
        assert_eq!(expand_end("3:15:45"), vec![window((3, 15, 45), (3, 15, 45))]);
        assert_eq!(expand_not_end("3:15:45"), vec![window((3, 15, 45), (3, 15, 45))]);
    }

    #[test]
    fn explicit_range_end_depends_on_the_policy() {
        assert_eq!(expand_end("3-4"), vec![window((3, 0, 0), (4, 59, 59))]);
        assert_eq!(expand_not_end("3-4"), vec![window((3, 0, 0), (4, 0, 0))]);
    }

    #[test]
    fn same_endpoint_range_wraps_or_covers_the_hour() {
        assert_eq!(expand_end("3-3"), vec![window((3, 0, 0), (3, 59, 59))]);
        assert_eq!(
            expand_not_end("3-3"),
            vec![window((3, 0, 0), (23, 59, 59)), window((0, 0, 0), (3, 0, 0))]
        );
    }

    #[test]
    fn descending_range_splits_around_midnight() {
        assert_eq!(
            expand_end("3-1"),
            vec![window((3, 0, 0), (23, 59, 59)), window((0, 0, 0), (1, 59, 59))]
        );
        assert_eq!(
            expand_not_end("3-1"),
            vec![window((3, 0, 0), (23, 59, 59)), window((0, 0, 0), (1, 0, 0))]
        );
    }

    #[test]
    fn range_to_24_stops_at_end_of_day() {
        let until_midnight = vec![window((3, 0, 0), (23, 59, 59))];
        assert_eq!(expand_end("3-24"), until_midnight);
        assert_eq!(expand_not_end("3-24"), until_midnight);
    }

    #[test]
    fn minute_granularity_range_end_adjusts_seconds_only() {
        assert_eq!(expand_end("1:05-2:00"), vec![window((1, 5, 0), (2, 0, 59))]);
        assert_eq!(expand_not_end("1:05-2:00"), vec![window((1, 5, 0), (2, 0, 0))]);
    }

    #[test]
    fn full_precision_range_end_ignores_the_policy() {
        let exact = vec![window((1, 5, 0), (2, 0, 0))];
        assert_eq!(expand_end("1:05-2:00:00"), exact);
        assert_eq!(expand_not_end("1:05-2:00:00"), exact);
    }

    #[test]
    fn list_concatenates_in_source_order() {
        assert_eq!(
            expand_end("2-5,10-12,15"),
            vec![
                window((2, 0, 0), (5, 59, 59)),
                window((10, 0, 0), (12, 59, 59)),
                window((15, 0, 0), (15, 59, 59)),
            ]
        );
        assert_eq!(
            expand_not_end("2-5,10-12,15"),
            vec![
                window((2, 0, 0), (5, 0, 0)),
                window((10, 0, 0), (12, 0, 0)),
                window((15, 0, 0), (15, 59, 59)),
            ]
        );
    }

    #[test]
    fn empty_list_element_is_a_whole_day_window() {
        assert_eq!(
            expand_end("3,"),
            vec![window((3, 0, 0), (3, 59, 59)), window((0, 0, 0), (23, 59, 59))]
        );
    }

    #[test]
    fn too_many_range_separators_are_rejected() {
        assert!(matches!(
            expand("1-2-3", &Options::default()),
            Err(FormatError::TooManySeparators { separator: '-', .. })
        ));
    }

    #[test]
    fn time_errors_propagate() {
        assert!(matches!(expand("abc", &Options::default()), Err(FormatError::InvalidTime(_))));
        assert!(matches!(expand("1-25", &Options::default()), Err(FormatError::TimeOutOfRange(_))));
    }

    proptest! {
        // Whatever expands, no produced window ever wraps.
        #[test]
        fn expanded_windows_never_wrap(
            start_hour in 0u32..=24,
            end_hour in 0u32..=24,
            end_minute in proptest::option::of(0u32..60),
            hour_only_use_end: bool,
        ) {
            let end = match end_minute {
                Some(minute) => format!("{end_hour}:{minute:02}"),
                None => end_hour.to_string(),
            };
            let text = format!("{start_hour}-{end}");
            if let Ok(windows) = expand(&text, &with_policy(hour_only_use_end)) {
                prop_assert!(!windows.is_empty());
                prop_assert!(windows.len() <= 2);
                for w in windows {
                    prop_assert!(w.start() <= w.end());
                }
            }
        }
    }
}

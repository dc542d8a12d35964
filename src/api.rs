use crate::error::FormatError;
use crate::parser;
use crate::schedule::Schedule;
use crate::weekday::WEEKDAY_NAMES;

/// Options that control how the notation is tokenized and resolved.
///
/// This is an immutable value passed into the parser entry points; the
/// defaults give the `mon-wed@9-17=OPEN` form of the notation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Separator between the entries of one statement.
    pub entry_separator: char,
    /// Separator between the weekday selector and the time ranges.
    pub weekday_separator: char,
    /// Separator between the two endpoints of a range.
    pub range_separator: char,
    /// Separator between list elements (time ranges or weekday sub-selectors).
    pub list_separator: char,
    /// Separator in front of the trailing action label.
    pub action_separator: char,
    /// Weekday name table, Monday first. Matched ASCII case-insensitively.
    pub weekday_names: [String; 7],
    /// When true, a bare hour closing an explicit range covers that whole
    /// hour (`"9-17"` ends at 17:59:59 rather than at 17:00:00).
    pub hour_only_use_end: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            entry_separator: '|',
            weekday_separator: '@',
            range_separator: '-',
            list_separator: ',',
            action_separator: '=',
            weekday_names: WEEKDAY_NAMES.map(str::to_owned),
            hour_only_use_end: true,
        }
    }
}

/// Parse schedule notation using the default [`Options`].
///
/// # Example
/// ```
/// let schedule = weekspan::parse("mon-fri@9-17=OPEN").unwrap();
///
/// // 2024-01-03 is a Wednesday.
/// let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// assert!(schedule.matches(at));
/// assert_eq!(schedule.action_at(at, None), Some("OPEN"));
/// ```
pub fn parse(text: &str) -> Result<Schedule, FormatError> {
    parse_with(text, &Options::default())
}

/// Parse schedule notation with explicit [`Options`].
pub fn parse_with(text: &str, options: &Options) -> Result<Schedule, FormatError> {
    parser::parse_input(text, options)
}

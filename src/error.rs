//! Parse failures for the schedule notation.

use thiserror::Error;

/// Raised when input text does not follow the notation grammar.
///
/// Each variant carries the offending piece of the input. A `FormatError`
/// aborts the whole parse; no partial [`Schedule`](crate::Schedule) is
/// produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid time value '{0}'")]
    InvalidTime(String),

    #[error("time value '{0}' out of range")]
    TimeOutOfRange(String),

    #[error("unknown weekday name '{0}'")]
    UnknownWeekday(String),

    #[error("too many '{separator}' separators in '{clause}'")]
    TooManySeparators { separator: char, clause: String },
}

pub(crate) type Result<T> = std::result::Result<T, FormatError>;

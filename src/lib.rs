#[macro_use]
mod macros;
mod api;
mod error;
mod parser;
mod schedule;
mod weekday;

pub use api::{Options, parse, parse_with};
pub use error::FormatError;
pub use schedule::{Entry, Schedule, TimeWindow};
pub use weekday::WeekdaySet;

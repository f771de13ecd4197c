//! Error types for time-scale and calendar handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from time parsing or calendar arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// An ISO-8601 timestamp could not be parsed.
    InstantParse(String),
    /// An IANA timezone name was not recognised.
    UnknownTimezone(String),
    /// A `year-month` pair outside the supported calendar range.
    InvalidMonth(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstantParse(msg) => write!(f, "timestamp parse error: {msg}"),
            Self::UnknownTimezone(tz) => write!(f, "unknown timezone: {tz}"),
            Self::InvalidMonth(msg) => write!(f, "invalid month: {msg}"),
        }
    }
}

impl Error for TimeError {}

use std::error::Error;
use std::fmt::{Display, Formatter};

use panch_time::TimeError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OrchestratorError {
    Time(TimeError),
    InvalidMonthStart(String),
    InvalidLocalInstant(String),
}

impl Display for OrchestratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::InvalidMonthStart(s) => write!(f, "not a valid month-start timestamp: {s}"),
            Self::InvalidLocalInstant(s) => write!(f, "not a resolvable local instant: {s}"),
        }
    }
}

impl Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for OrchestratorError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

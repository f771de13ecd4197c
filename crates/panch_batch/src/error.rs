use std::fmt::{Display, Formatter};

/// Per-month failure returned inline in a [`crate::BatchResult`] map rather
/// than aborting the whole batch — one bad month never sinks the others.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthError {
    pub message: String,
}

impl MonthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for MonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

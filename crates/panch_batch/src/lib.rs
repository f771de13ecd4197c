//! Batch Executor: resolves many months of one location against the
//! two-tier cache in parallel, bounded by a semaphore sized to the
//! per-task ephemeris memory footprint.

pub mod error;
pub mod executor;

pub use error::MonthError;
pub use executor::{BatchExecutor, BatchResult};

//! Two-tier cache for monthly event records: a process-local TTL store in
//! front of an optional Postgres-backed persistent store.
//!
//! Cache operations never block detector execution — a caller who wants a
//! persistent store must `connect` explicitly and is free to skip it
//! entirely, falling back to compute-every-time behind the memory tier.

pub mod error;
pub mod key;
pub mod memory;
pub mod persistent;
pub mod record;

pub use error::CacheError;
pub use key::{CacheKey, location_hash};
pub use memory::MemoryStore;
pub use record::{MonthRecord, MoonMonthlyRows};

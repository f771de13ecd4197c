//! Calendar, angle, and sidereal-time primitives for the planetary-event engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - `Instant`, a UTC timestamp with civil-month bucketing in any IANA timezone
//! - Degree-angle normalisation and the sign/nakshatra/pada classification helpers
//! - Greenwich/local sidereal time

pub mod angle;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::{Instant, month_bounds_utc, resolve_timezone};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_tdb_seconds,
    tdb_seconds_to_jd,
};

//! Errors from the ephemeris adapter.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by the ephemeris adapter.
///
/// Per-call ephemeris failures (a single body/instant lookup) are not an
/// error variant here — they surface as `NaN` so scanners can skip the
/// sample without aborting a whole scan (see the design notes on
/// `EphemerisTransient`). Only process-wide initialization failure is a
/// hard error.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// `init()` could not locate any kernel data and the analytic fallback
    /// also failed to construct (should not normally happen — the fallback
    /// has no file dependency — but is kept for future fallibility).
    Init(String),
    /// `init()` was already called in this process.
    AlreadyInitialized,
    /// A convenience function was called before `init()`.
    NotInitialized,
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "ephemeris initialization failed: {msg}"),
            Self::AlreadyInitialized => write!(f, "ephemeris adapter already initialized"),
            Self::NotInitialized => write!(f, "ephemeris adapter not initialized"),
        }
    }
}

impl Error for EphemerisError {}

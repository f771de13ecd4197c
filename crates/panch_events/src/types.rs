//! Event records emitted by the detectors in this crate.
//!
//! All instants are absolute (UTC-backed); local-time reprojection and
//! month filtering happen one layer up, in the orchestrator.

use panch_ephemeris::Body;
use panch_scanner::ExtremumKind;
use panch_time::Instant;
use serde::{Deserialize, Serialize};

/// A body's longitude crossing a 30° rashi boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignChange {
    pub body: Body,
    pub instant: Instant,
    pub from_sign: u8,
    pub to_sign: u8,
}

/// The Moon entering a new nakshatra/pada (one of 108 equal segments).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraChange {
    pub instant: Instant,
    pub nakshatra: u8,
    pub pada: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationKind {
    Retrograde,
    Direct,
}

/// A body's longitudinal speed changing sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub body: Body,
    pub instant: Instant,
    pub kind: StationKind,
}

/// A span during which a body was retrograde, bounded by a pair of
/// [`Station`] events (or clipped to the scan window at either end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrogradeWindow {
    pub body: Body,
    pub start_instant: Instant,
    pub end_instant: Instant,
}

/// A span during which a body's angular separation from the Sun was
/// within its combustion orb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombustionWindow {
    pub body: Body,
    pub start_instant: Instant,
    pub end_instant: Instant,
    pub orb_degrees: f64,
}

/// A local maximum or minimum of a body's signed longitudinal speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityExtremum {
    pub body: Body,
    pub instant: Instant,
    pub signed_speed_deg_per_day: f64,
    pub kind: ExtremumKind,
}

/// The ascendant crossing a rashi boundary, with an optional auxiliary
/// marker at the midpoint of the new sign (`to_sign*30 + 15`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AscendantFlip {
    pub instant: Instant,
    pub from_sign: u8,
    pub to_sign: u8,
    pub midpoint_instant: Option<Instant>,
}

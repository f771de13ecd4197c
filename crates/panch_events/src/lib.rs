//! Event detectors: one per astronomical predicate the monthly engine
//! tracks, each composing [`panch_scanner`]'s classification-boundary
//! scanner with a function built atop [`panch_ephemeris`].
//!
//! Every detector here is a pure function of an explicit time window; none
//! of them know about calendar months, timezones, or caching — that's the
//! orchestrator's job, one layer up.

pub mod ascendant;
pub mod combustion;
pub mod ingress;
pub mod nakshatra;
pub mod station;
pub mod types;
pub mod velocity;

pub use ascendant::ascendant_flips;
pub use combustion::combustion_windows;
pub use ingress::sign_ingresses;
pub use nakshatra::{current_nakshatra_pada, nakshatra_pada_changes};
pub use station::{retrograde_windows, stations};
pub use types::{
    AscendantFlip, CombustionWindow, NakshatraChange, RetrogradeWindow, SignChange, Station,
    StationKind, VelocityExtremum,
};
pub use velocity::velocity_extrema;

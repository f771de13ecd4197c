//! Generic boundary-scanning primitives shared by every event detector.
//!
//! This crate knows nothing about signs, nakshatras, or planets — it
//! operates on a caller-supplied scalar function of time and a
//! caller-supplied classifier. That separation is deliberate: longitude is
//! modular, so hunting for exact boundaries by bisecting on raw value
//! (looking for a sign change in `f(t) - threshold`) breaks down at the
//! 360°↔0° wrap. Classifying each sample into a bin index first and
//! bisecting on classification change sidesteps the wrap entirely, and
//! the same scan loop then serves ingresses, nakshatra/pada transitions,
//! stations, and combustion windows alike.
//!
//! [`parabolic`] complements the scanner for the one family it does not
//! cover well: locating a velocity extremum, where the quantity of
//! interest is a turning point in a smooth curve rather than a
//! classification change.

pub mod parabolic;
pub mod scan;

pub use parabolic::{Extremum, ExtremumKind, parabolic_vertex};
pub use scan::{Boundary, scan_boundaries};

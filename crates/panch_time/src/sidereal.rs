//! Greenwich and local sidereal time.
//!
//! The engine treats UT1 as UTC and TDB as UTC (see the design notes on
//! why a full leap-second/EOP chain is not worth its weight at this
//! precision target), so GMST is derived directly from the UT Julian
//! Date using the standard IAU 1982 polynomial.

use crate::julian::J2000_JD;
use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Greenwich Mean Sidereal Time, in radians, for a UT1 Julian Date.
///
/// Meeus, "Astronomical Algorithms" (2nd ed.), eq. 12.4, converted from
/// the original degrees/hours form to radians directly.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36_525.0;

    let gmst_deg = 280.460_618_37
        + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;

    (gmst_deg.to_radians()).rem_euclid(TWO_PI)
}

/// Local Sidereal Time, in radians, given GMST and an east-positive
/// geographic longitude in radians.
pub fn local_sidereal_time_rad(gmst_rad: f64, lon_rad: f64) -> f64 {
    (gmst_rad + lon_rad).rem_euclid(TWO_PI)
}

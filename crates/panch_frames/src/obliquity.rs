//! Obliquity of the ecliptic constants and polynomials.
//!
//! The J2000.0 value is from the IAU 1976 precession model, which is the
//! standard used by DE planetary ephemeris kernels.

use std::f64::consts::PI;

/// Mean obliquity of the ecliptic at J2000.0 (IAU 1976), in radians.
///
/// 23 deg 26' 21.448" = 84381.448" = 23.4392911111... deg
pub const OBLIQUITY_J2000_RAD: f64 = 23.439_291_111_1 * PI / 180.0;

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_1;

/// Cosine of J2000 obliquity (precomputed for rotation matrix).
pub const COS_OBL: f64 = 0.917_482_062_069_258_9;

/// Sine of J2000 obliquity (precomputed for rotation matrix).
pub const SIN_OBL: f64 = 0.397_777_155_931_735_8;

/// Mean obliquity of the ecliptic at a given TDB date, in arcseconds.
///
/// IAU 1980 polynomial (Laskar's higher-order terms are dropped; they
/// only matter over millennia-scale baselines this engine never spans).
/// `t` is TDB centuries past J2000.0.
pub fn mean_obliquity_of_date_arcsec(t: f64) -> f64 {
    84381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t
}

/// Mean obliquity of the ecliptic at a given TDB date, in radians.
pub fn mean_obliquity_of_date_rad(t: f64) -> f64 {
    mean_obliquity_of_date_arcsec(t) * PI / 648_000.0
}

//! Nutation in longitude and obliquity.
//!
//! Full IAU 2000B nutation is a 77-term trigonometric series; this engine
//! only needs nutation to correct sidereal time (GAST - GMST) and true
//! obliquity to sub-arcsecond accuracy, not to reproduce IAU2000B exactly,
//! so a truncated low-precision series (the dominant lunar and solar
//! terms, after Meeus ch. 22) is used instead.

use std::f64::consts::PI;

const D2R: f64 = PI / 180.0;

/// The five Delaunay fundamental arguments, in degrees, at TDB centuries `t`.
pub struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun.
    pub d: f64,
    /// Mean anomaly of the Sun.
    pub m: f64,
    /// Mean anomaly of the Moon.
    pub m_prime: f64,
    /// Moon's argument of latitude.
    pub f: f64,
    /// Longitude of the ascending node of the Moon's mean orbit.
    pub omega: f64,
}

/// Compute the Delaunay fundamental arguments (Meeus ch. 22), in degrees.
pub fn fundamental_arguments(t: f64) -> FundamentalArguments {
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t * t + t * t * t / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t * t - t * t * t / 300_000.0;
    let m_prime = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t * t + t * t * t / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t * t + t * t * t / 327_270.0;
    let omega = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0;
    FundamentalArguments { d, m, m_prime, f, omega }
}

/// Truncated nutation series: `(Δψ, Δε)` in arcseconds at TDB centuries `t`.
///
/// Named after IAU 2000B for API continuity with the full model, but this
/// implementation keeps only the handful of terms whose amplitude exceeds
/// about 0.1 arcsecond, which is comfortably below the minute-level timing
/// resolution the rest of the engine works at.
pub fn nutation_iau2000b(t: f64) -> (f64, f64) {
    let fa = fundamental_arguments(t);
    let omega = fa.omega * D2R;
    let d = fa.d * D2R;
    let m = fa.m * D2R;
    let m_prime = fa.m_prime * D2R;
    let f = fa.f * D2R;

    // Leading terms of the 1980 IAU nutation theory (arcseconds),
    // argument combinations per Meeus Table 22.A, largest amplitudes only.
    let mut dpsi = (-17.1996 - 0.01742 * t) * omega.sin();
    dpsi += (-1.3187 - 0.00016 * t) * (2.0 * (f - d + omega)).sin();
    dpsi += (-0.2274 - 0.00002 * t) * (2.0 * (f + omega)).sin();
    dpsi += (0.2062 + 0.00002 * t) * (2.0 * omega).sin();
    dpsi += (0.1426 - 0.00034 * t) * m.sin();
    dpsi += (0.0712) * m_prime.sin();
    dpsi += (-0.0517 + 0.00012 * t) * (2.0 * (f - d + omega) + m).sin();

    let mut deps = (9.2025 + 0.00089 * t) * omega.cos();
    deps += (0.5736 - 0.00031 * t) * (2.0 * (f - d + omega)).cos();
    deps += (0.0977 - 0.00005 * t) * (2.0 * (f + omega)).cos();
    deps += (-0.0895 + 0.00005 * t) * (2.0 * omega).cos();
    deps += (0.0224 - 0.00006 * t) * (2.0 * (f - d + omega) + m).cos();

    (dpsi, deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutation_is_small_arcseconds() {
        let (dpsi, deps) = nutation_iau2000b(0.24); // ~2024
        assert!(dpsi.abs() < 20.0, "dpsi={dpsi}");
        assert!(deps.abs() < 20.0, "deps={deps}");
    }

    #[test]
    fn fundamental_arguments_are_finite() {
        let fa = fundamental_arguments(0.5);
        assert!(fa.d.is_finite());
        assert!(fa.m.is_finite());
        assert!(fa.m_prime.is_finite());
        assert!(fa.f.is_finite());
        assert!(fa.omega.is_finite());
    }

    #[test]
    fn nutation_at_j2000_matches_known_order_of_magnitude() {
        // At J2000.0 the dominant term is dominated by omega ~ 125 deg,
        // giving Delta-psi on the order of -14 arcsec (IAU2000B: -14.58).
        let (dpsi, _) = nutation_iau2000b(0.0);
        assert!((-20.0..-5.0).contains(&dpsi), "dpsi={dpsi}");
    }
}

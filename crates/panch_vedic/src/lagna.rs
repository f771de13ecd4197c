//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Standalone reusable module implementing the standard spherical astronomy
//! formulas for the ecliptic longitude of the Lagna and MC.
//!
//! Uses apparent (GAST-based) local sidereal time and true obliquity
//! (mean obliquity polynomial + truncated nutation series), matching the
//! standard astrological convention (Meeus Ch. 13, IERS 2010).
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use std::f64::consts::TAU;

use panch_frames::{mean_obliquity_of_date_rad, nutation_iau2000b};
use panch_time::sidereal::{gmst_rad, local_sidereal_time_rad};

use crate::error::VedicError;
use crate::util::GeoLocation;

/// Compute apparent (GAST-based) local sidereal time and true obliquity
/// for a UT1 Julian Date, treated here as equal to UTC/TDB (see the
/// design notes on why a full leap-second/EOP chain is not carried).
///
/// - GMST from the IAU 1982 polynomial.
/// - GAST = GMST + Δψ·cos(ε_mean)  (equation of the equinoxes, IERS 2010)
/// - True ε = ε_mean + Δε           (nutation in obliquity)
///
/// Returns `(apparent_lst_rad, true_eps_rad)`.
pub(crate) fn apparent_lst_and_true_eps(location: &GeoLocation, jd_ut: f64) -> (f64, f64) {
    let gmst = gmst_rad(jd_ut);
    let lst_mean = local_sidereal_time_rad(gmst, location.longitude_rad());

    let t = (jd_ut - panch_time::J2000_JD) / 36_525.0;
    let eps_mean = mean_obliquity_of_date_rad(t);
    let (dpsi_arcsec, deps_arcsec) = nutation_iau2000b(t);
    let dpsi_rad = dpsi_arcsec.to_radians() / 3600.0;
    let deps_rad = deps_arcsec.to_radians() / 3600.0;

    let ee_rad = dpsi_rad * eps_mean.cos();
    let eps_true = eps_mean + deps_rad;
    let lst_apparent = (lst_mean + ee_rad).rem_euclid(TAU);

    (lst_apparent, eps_true)
}

/// Ecliptic longitude of the Lagna (Ascendant) in radians.
///
/// Formula (Meeus Ch. 13):
/// `Asc = atan2(cos(LST), -(sin(LST)*cos(eps) + tan(phi)*sin(eps)))`
///
/// Returns a value in `[0, 2*pi)`, or an error if `location` carries an
/// out-of-range latitude.
pub fn lagna_longitude_rad(location: &GeoLocation, jd_ut: f64) -> Result<f64, VedicError> {
    let (lst, eps) = apparent_lst_and_true_eps(location, jd_ut);
    let phi = location.latitude_rad();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    Ok(asc.rem_euclid(TAU))
}

/// Ecliptic longitude of the MC (Midheaven) in radians.
///
/// Formula: `MC = atan2(sin(LST), cos(LST)*cos(eps))`
pub fn mc_longitude_rad(location: &GeoLocation, jd_ut: f64) -> f64 {
    let (lst, eps) = apparent_lst_and_true_eps(location, jd_ut);
    f64::atan2(lst.sin(), lst.cos() * eps.cos()).rem_euclid(TAU)
}

/// Compute both Lagna and MC (shares LST and obliquity computation).
///
/// Returns `(lagna_rad, mc_rad)`, both in `[0, 2*pi)`.
pub fn lagna_and_mc_rad(location: &GeoLocation, jd_ut: f64) -> Result<(f64, f64), VedicError> {
    let (lst, eps) = apparent_lst_and_true_eps(location, jd_ut);
    let phi = location.latitude_rad();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());

    Ok((asc.rem_euclid(TAU), mc.rem_euclid(TAU)))
}

/// RAMC (Right Ascension of the MC) in radians.
///
/// Equals apparent (GAST-based) local sidereal time by definition.
pub fn ramc_rad(location: &GeoLocation, jd_ut: f64) -> f64 {
    apparent_lst_and_true_eps(location, jd_ut).0
}

/// Internal helper: compute Lagna, MC, and RAMC from a pre-computed LST.
///
/// `eps_rad` is the obliquity of the ecliptic in radians. Unit tests pass
/// a fixed value to test formula geometry independent of the
/// epoch-varying obliquity.
pub(crate) fn lagna_mc_ramc_from_lst(lst_rad: f64, latitude_rad: f64, eps_rad: f64) -> (f64, f64, f64) {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * eps_rad.cos() + latitude_rad.tan() * eps_rad.sin()),
    );

    let mc = f64::atan2(lst_rad.sin(), lst_rad.cos() * eps_rad.cos());

    (
        asc.rem_euclid(TAU),
        mc.rem_euclid(TAU),
        lst_rad.rem_euclid(TAU),
    )
}

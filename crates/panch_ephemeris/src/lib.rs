//! Ephemeris Adapter: a thin, side-effect-scoped interface over an
//! external ephemeris.
//!
//! Exposes three operations — [`longitude`], [`longitude_and_speed`], and
//! [`ascendant`] — and encapsulates ephemeris-file discovery and one-time
//! process-wide initialization (see [`global`]).
//!
//! Any ephemeris failure for a particular body/instant surfaces as `NaN`;
//! callers (scanners) propagate NaN through scans without emitting events,
//! rather than treating it as an error.

pub mod analytic_backend;
pub mod backend;
pub mod body;
pub mod error;
pub mod global;
pub mod kernel_backend;

pub use analytic_backend::AnalyticBackend;
pub use backend::EphemerisBackend;
pub use body::Body;
pub use error::EphemerisError;
pub use global::{active_backend_name, init, is_initialized};
pub use kernel_backend::KernelBackend;

pub use panch_vedic::AyanamshaSystem as Ayanamsa;
use panch_vedic::{LunarNode, NodeMode, ayanamsha_deg, jd_tdb_to_centuries, lunar_node_deg};

use panch_time::Instant;
use panch_time::angle::mod360;
use panch_vedic::{GeoLocation, lagna_longitude_rad};

fn ayanamsa_offset_deg(ayanamsa: Ayanamsa, t_centuries: f64) -> f64 {
    ayanamsha_deg(ayanamsa, t_centuries, true)
}

/// Tropical geocentric ecliptic longitude of `body`, in degrees, before
/// any sidereal correction. `NaN` if the backend cannot resolve it.
fn tropical_longitude_deg(body: Body, jd_ut: f64, t_centuries: f64) -> f64 {
    match body {
        Body::Rahu => lunar_node_deg(LunarNode::Rahu, t_centuries, NodeMode::True),
        Body::Ketu => lunar_node_deg(LunarNode::Ketu, t_centuries, NodeMode::True),
        _ => {
            let code = body
                .naif_code()
                .expect("non-node bodies always have a NAIF code");
            global::ensure_initialized()
                .tropical_longitude_and_speed(code, jd_ut)
                .0
        }
    }
}

/// Sidereal (or tropical, if `ayanamsa` is [`Ayanamsa::Tropical`])
/// ecliptic longitude of `body` at `instant`, in `[0, 360)`.
///
/// `NaN` if the underlying ephemeris lookup fails for this body/instant.
pub fn longitude(body: Body, instant: Instant, ayanamsa: Ayanamsa) -> f64 {
    let jd_ut = instant.jd();
    let t = jd_tdb_to_centuries(jd_ut);

    let tropical = tropical_longitude_deg(body, jd_ut, t);
    if tropical.is_nan() {
        return f64::NAN;
    }

    mod360(tropical - ayanamsa_offset_deg(ayanamsa, t))
}

/// Sidereal longitude and longitudinal speed (degrees, degrees/day).
///
/// Speed is the ephemeris-reported (or analytically derived)
/// d(longitude)/dt; the ayanamsa's own drift (a fraction of an
/// arcsecond/day) is not subtracted out of the speed, since it is
/// negligible next to every tracked body's own motion.
pub fn longitude_and_speed(body: Body, instant: Instant, ayanamsa: Ayanamsa) -> (f64, f64) {
    let jd_ut = instant.jd();
    let t = jd_tdb_to_centuries(jd_ut);

    let (tropical_lon, speed) = match body {
        Body::Rahu | Body::Ketu => {
            const DT_DAYS: f64 = 1.0 / 1440.0;
            let dt_centuries = DT_DAYS / 36_525.0;
            let lon = tropical_longitude_deg(body, jd_ut, t);
            let lon_minus = tropical_longitude_deg(body, jd_ut - DT_DAYS, t - dt_centuries);
            let lon_plus = tropical_longitude_deg(body, jd_ut + DT_DAYS, t + dt_centuries);
            let mut delta = lon_plus - lon_minus;
            if delta > 180.0 {
                delta -= 360.0;
            } else if delta < -180.0 {
                delta += 360.0;
            }
            (lon, delta / (2.0 * DT_DAYS))
        }
        _ => {
            let code = body
                .naif_code()
                .expect("non-node bodies always have a NAIF code");
            global::ensure_initialized().tropical_longitude_and_speed(code, jd_ut)
        }
    };

    if tropical_lon.is_nan() {
        return (f64::NAN, f64::NAN);
    }

    let sidereal_lon = mod360(tropical_lon - ayanamsa_offset_deg(ayanamsa, t));
    (sidereal_lon, speed)
}

/// Ascendant (Lagna) longitude at `instant` for a given location, in
/// `[0, 360)`. `NaN` for an out-of-range latitude or longitude.
pub fn ascendant(instant: Instant, lat_deg: f64, lon_deg: f64, ayanamsa: Ayanamsa) -> f64 {
    let location = match GeoLocation::new(lat_deg, lon_deg) {
        Ok(loc) => loc,
        Err(_) => return f64::NAN,
    };

    let jd_ut = instant.jd();
    let t = jd_tdb_to_centuries(jd_ut);

    let Ok(lagna_rad) = lagna_longitude_rad(&location, jd_ut) else {
        return f64::NAN;
    };

    mod360(lagna_rad.to_degrees() - ayanamsa_offset_deg(ayanamsa, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j2000_noon() -> Instant {
        Instant::from_utc_ymd_hms(2000, 1, 1, 12, 0, 0.0)
    }

    #[test]
    fn longitude_is_always_in_range() {
        for &body in Body::all() {
            for &aya in &[Ayanamsa::Lahiri, Ayanamsa::Raman, Ayanamsa::Tropical] {
                let lon = longitude(body, j2000_noon(), aya);
                assert!(
                    lon.is_nan() || (0.0..360.0).contains(&lon),
                    "body={body:?} aya={aya:?} lon={lon}"
                );
            }
        }
    }

    #[test]
    fn ketu_is_always_opposite_rahu() {
        let instant = j2000_noon();
        for &aya in &[Ayanamsa::Lahiri, Ayanamsa::Raman, Ayanamsa::Tropical] {
            let rahu = longitude(Body::Rahu, instant, aya);
            let ketu = longitude(Body::Ketu, instant, aya);
            let diff = mod360(ketu - rahu);
            assert!((diff - 180.0).abs() < 1e-6, "aya={aya:?} diff={diff}");
        }
    }

    #[test]
    fn tropical_ayanamsa_leaves_longitude_unshifted() {
        let instant = j2000_noon();
        let lon_trop = longitude(Body::Mars, instant, Ayanamsa::Tropical);
        let t = jd_tdb_to_centuries(instant.jd());
        let raw = tropical_longitude_deg(Body::Mars, instant.jd(), t);
        assert!((lon_trop - raw).abs() < 1e-9);
    }

    #[test]
    fn ascendant_rejects_invalid_latitude() {
        let instant = j2000_noon();
        let asc = ascendant(instant, 120.0, 72.877, Ayanamsa::Lahiri);
        assert!(asc.is_nan());
    }

    #[test]
    fn ascendant_in_range_for_valid_location() {
        let instant = j2000_noon();
        let asc = ascendant(instant, 19.076, 72.877, Ayanamsa::Lahiri);
        assert!((0.0..360.0).contains(&asc), "asc={asc}");
    }

    #[test]
    fn longitude_and_speed_agrees_with_longitude() {
        let instant = j2000_noon();
        let lon = longitude(Body::Venus, instant, Ayanamsa::Raman);
        let (lon2, speed) = longitude_and_speed(Body::Venus, instant, Ayanamsa::Raman);
        assert!((lon - lon2).abs() < 1e-6);
        assert!(speed.is_finite());
    }
}

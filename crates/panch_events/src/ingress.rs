//! Sign-ingress detector: a body's longitude crossing a 30° rashi boundary.

use panch_ephemeris::{Ayanamsa, Body, longitude};
use panch_scanner::scan_boundaries;
use panch_time::Instant;
use panch_time::angle::sign_index;

use crate::types::SignChange;

/// Coarse traversal step, in minutes, for sign-ingress scanning of `body`.
///
/// Faster-moving bodies need a finer step to avoid skipping a whole sign
/// between samples; the Sun and outer planets can take a coarser one.
fn coarse_step_minutes(body: Body) -> f64 {
    match body {
        Body::Sun => 120.0,
        Body::Moon => 60.0,
        Body::Mercury => 30.0,
        Body::Venus => 60.0,
        Body::Mars => 120.0,
        Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto => 240.0,
        Body::Rahu | Body::Ketu => 60.0,
    }
}

/// Every sign ingress for `body` within `[window_start, window_end)`.
pub fn sign_ingresses(
    body: Body,
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<SignChange> {
    let f = move |t: Instant| longitude(body, t, ayanamsa);
    let classify = |lon: f64| {
        if lon.is_nan() {
            None
        } else {
            Some(sign_index(lon) as i64)
        }
    };

    scan_boundaries(f, classify, window_start, window_end, coarse_step_minutes(body))
        .into_iter()
        .map(|b| SignChange {
            body,
            instant: b.instant,
            from_sign: b.from_class as u8,
            to_sign: b.to_class as u8,
        })
        .collect()
}

//! Station detector: a body's longitudinal speed changing sign
//! (apparent retrograde↔direct), paired into retrograde windows.

use panch_ephemeris::{Ayanamsa, Body, longitude, longitude_and_speed};
use panch_scanner::scan_boundaries;
use panch_time::Instant;

use crate::types::{RetrogradeWindow, Station, StationKind};

const COARSE_STEP_MINUTES: f64 = 60.0;
/// A station emission within this long of a same-kind predecessor is a
/// noisy re-detection of the same crossing, not a new station.
const SAME_KIND_SUPPRESS_SECONDS: f64 = 6.0 * 3600.0;
/// Half-window for the central-difference fallback when the ephemeris
/// doesn't report a speed directly.
const SPEED_FALLBACK_HALF_WINDOW_DAYS: f64 = 30.0 / 1440.0;

fn speed_with_fallback(body: Body, ayanamsa: Ayanamsa, t: Instant) -> f64 {
    let (lon, speed) = longitude_and_speed(body, t, ayanamsa);
    if lon.is_nan() {
        return f64::NAN;
    }
    if speed.is_finite() {
        return speed;
    }

    let half_seconds = SPEED_FALLBACK_HALF_WINDOW_DAYS * 86_400.0;
    let minus = longitude(body, t.plus_seconds(-half_seconds), ayanamsa);
    let plus = longitude(body, t.plus_seconds(half_seconds), ayanamsa);
    if minus.is_nan() || plus.is_nan() {
        return f64::NAN;
    }

    let mut delta = plus - minus;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta / (2.0 * SPEED_FALLBACK_HALF_WINDOW_DAYS)
}

/// Every station for `body` within `[window_start, window_end)`, with
/// noisy same-kind re-detections within six hours of each other collapsed
/// to the first occurrence.
pub fn stations(
    body: Body,
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<Station> {
    let f = move |t: Instant| speed_with_fallback(body, ayanamsa, t);
    let classify = |speed: f64| {
        if speed.is_nan() {
            None
        } else {
            Some(if speed < 0.0 { 0i64 } else { 1i64 })
        }
    };

    let boundaries = scan_boundaries(f, classify, window_start, window_end, COARSE_STEP_MINUTES);

    let mut out: Vec<Station> = Vec::new();
    for b in boundaries {
        let kind = if b.to_class == 0 { StationKind::Retrograde } else { StationKind::Direct };
        if let Some(prev) = out.last() {
            if prev.kind == kind
                && b.instant.diff_seconds(prev.instant) < SAME_KIND_SUPPRESS_SECONDS
            {
                continue;
            }
        }
        out.push(Station { body, instant: b.instant, kind });
    }
    out
}

/// Pair consecutive {retrograde, direct} stations into [`RetrogradeWindow`]s.
///
/// A retrograde station with no following direct station before
/// `window_end` yields a window clipped there; a direct station with no
/// preceding retrograde station (the body was already retrograde when the
/// scan began) yields a window whose start is clipped to `window_start`.
pub fn retrograde_windows(
    body: Body,
    stations: &[Station],
    window_start: Instant,
    window_end: Instant,
) -> Vec<RetrogradeWindow> {
    let mut out = Vec::new();
    let mut open_start: Option<Instant> = None;

    for s in stations {
        match s.kind {
            StationKind::Retrograde => open_start = Some(s.instant),
            StationKind::Direct => {
                let start = open_start.take().unwrap_or(window_start);
                out.push(RetrogradeWindow { body, start_instant: start, end_instant: s.instant });
            }
        }
    }

    if let Some(start) = open_start {
        out.push(RetrogradeWindow { body, start_instant: start, end_instant: window_end });
    }

    out
}

//! Combustion detector: windows of angular proximity to the Sun.

use panch_ephemeris::{Ayanamsa, Body, longitude};
use panch_scanner::scan_boundaries;
use panch_time::Instant;
use panch_time::angle::abs_sep;

use crate::types::CombustionWindow;

const COARSE_STEP_MINUTES: f64 = 60.0;

/// Per-body combustion orb in degrees, or `None` for bodies that never
/// combust (the Sun itself, and the lunar nodes, which have no
/// well-defined angular separation from the Sun in this model).
fn orb_degrees(body: Body) -> Option<f64> {
    match body {
        Body::Mercury => Some(14.0),
        Body::Venus => Some(10.0),
        Body::Mars => Some(17.0),
        Body::Jupiter => Some(11.0),
        Body::Saturn => Some(15.0),
        Body::Uranus | Body::Neptune | Body::Pluto => Some(10.0),
        Body::Moon => Some(12.0),
        Body::Sun | Body::Rahu | Body::Ketu => None,
    }
}

/// Every combustion window for `body` within `[window_start, window_end)`.
///
/// A window open at `window_start` is left-clipped there; one still open
/// at `window_end` is right-clipped there. Returns an empty list for
/// bodies with no defined orb.
pub fn combustion_windows(
    body: Body,
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<CombustionWindow> {
    let Some(orb) = orb_degrees(body) else {
        return Vec::new();
    };

    let f = move |t: Instant| {
        let sun = longitude(Body::Sun, t, ayanamsa);
        let other = longitude(body, t, ayanamsa);
        if sun.is_nan() || other.is_nan() {
            f64::NAN
        } else {
            abs_sep(sun, other)
        }
    };
    let classify = move |sep: f64| {
        if sep.is_nan() {
            None
        } else {
            Some(if sep <= orb { 1i64 } else { 0i64 })
        }
    };

    let boundaries = scan_boundaries(f, classify, window_start, window_end, COARSE_STEP_MINUTES);

    let mut out = Vec::new();
    let mut open_start = match classify(f(window_start)) {
        Some(1) => Some(window_start),
        _ => None,
    };

    for b in boundaries {
        match (b.from_class, b.to_class) {
            (0, 1) => open_start = Some(b.instant),
            (1, 0) => {
                if let Some(start) = open_start.take() {
                    out.push(CombustionWindow {
                        body,
                        start_instant: start,
                        end_instant: b.instant,
                        orb_degrees: orb,
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(start) = open_start {
        out.push(CombustionWindow {
            body,
            start_instant: start,
            end_instant: window_end,
            orb_degrees: orb,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> Instant {
        Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0).plus_seconds((n * 86_400) as f64)
    }

    #[test]
    fn mercury_has_combustion_windows_over_a_year() {
        let windows = combustion_windows(Body::Mercury, Ayanamsa::Lahiri, day(0), day(365));
        assert!(!windows.is_empty());
        for w in &windows {
            assert!(w.end_instant.diff_seconds(w.start_instant) > 0.0);
            assert!((w.orb_degrees - 14.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sun_and_nodes_have_no_combustion() {
        assert!(combustion_windows(Body::Sun, Ayanamsa::Lahiri, day(0), day(365)).is_empty());
        assert!(combustion_windows(Body::Rahu, Ayanamsa::Lahiri, day(0), day(365)).is_empty());
        assert!(combustion_windows(Body::Ketu, Ayanamsa::Lahiri, day(0), day(365)).is_empty());
    }

    #[test]
    fn windows_do_not_overlap() {
        let windows = combustion_windows(Body::Venus, Ayanamsa::Lahiri, day(0), day(365));
        for pair in windows.windows(2) {
            assert!(pair[1].start_instant.diff_seconds(pair[0].end_instant) >= 0.0);
        }
    }
}

//! Moon nakshatra/pada detector: the Moon crossing one of 108 equal
//! segments (27 nakshatras × 4 padas).

use panch_ephemeris::{Ayanamsa, Body, longitude};
use panch_scanner::scan_boundaries;
use panch_time::Instant;
use panch_time::angle::pada_index;

use crate::types::NakshatraChange;

/// Coarse traversal step, in minutes: a short window can afford finer
/// sampling of the Moon's ~13°/day crawl through the pada grid.
fn coarse_step_minutes(window_days: f64) -> f64 {
    if window_days <= 15.0 { 30.0 } else { 60.0 }
}

fn segment_to_nakshatra_pada(segment: u8) -> (u8, u8) {
    (segment / 4, segment % 4 + 1)
}

/// Every nakshatra/pada boundary crossing within `[window_start, window_end)`.
///
/// Unlike the other detectors, this one never returns empty for a
/// non-degenerate window: if the Moon doesn't cross a boundary (window
/// narrower than one pada, roughly a day), callers should fall back to
/// [`current_nakshatra_pada`] at the window's opening instant.
pub fn nakshatra_pada_changes(
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<NakshatraChange> {
    let window_days = window_end.diff_seconds(window_start) / 86_400.0;
    let step = coarse_step_minutes(window_days);

    let f = move |t: Instant| longitude(Body::Moon, t, ayanamsa);
    let classify = |lon: f64| {
        if lon.is_nan() {
            None
        } else {
            Some(pada_index(lon) as i64)
        }
    };

    scan_boundaries(f, classify, window_start, window_end, step)
        .into_iter()
        .map(|b| {
            let (nakshatra, pada) = segment_to_nakshatra_pada(b.to_class as u8);
            NakshatraChange { instant: b.instant, nakshatra, pada }
        })
        .collect()
}

/// The Moon's current (nakshatra, pada) at `instant`, or `None` if the
/// ephemeris lookup fails.
pub fn current_nakshatra_pada(ayanamsa: Ayanamsa, instant: Instant) -> Option<(u8, u8)> {
    let lon = longitude(Body::Moon, instant, ayanamsa);
    if lon.is_nan() {
        return None;
    }
    Some(segment_to_nakshatra_pada(pada_index(lon)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> Instant {
        Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0).plus_seconds((n * 86_400) as f64)
    }

    #[test]
    fn produces_many_transitions_over_a_month() {
        let changes = nakshatra_pada_changes(Ayanamsa::Lahiri, day(0), day(30));
        // the Moon sweeps all 108 padas roughly once every 27.3 days
        assert!(changes.len() >= 90, "got {}", changes.len());
        for c in &changes {
            assert!(c.nakshatra < 27);
            assert!((1..=4).contains(&c.pada));
        }
    }

    #[test]
    fn transitions_are_time_ordered() {
        let changes = nakshatra_pada_changes(Ayanamsa::Raman, day(0), day(10));
        for w in changes.windows(2) {
            assert!(w[1].instant.diff_seconds(w[0].instant) > 0.0);
        }
    }

    #[test]
    fn current_pada_is_in_range() {
        let (nakshatra, pada) = current_nakshatra_pada(Ayanamsa::Lahiri, day(0)).unwrap();
        assert!(nakshatra < 27);
        assert!((1..=4).contains(&pada));
    }
}

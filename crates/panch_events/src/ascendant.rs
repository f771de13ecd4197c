//! Ascendant-flip detector: the rising sign changing as Earth rotates.

use panch_ephemeris::{Ayanamsa, ascendant};
use panch_scanner::scan_boundaries;
use panch_time::Instant;
use panch_time::angle::{angdiff, sign_index};

use crate::types::AscendantFlip;

/// Coarse traversal step, in minutes: the ascendant sweeps the whole
/// zodiac once per sidereal day, so a short window can afford a finer
/// step than a long one.
fn coarse_step_minutes(window_hours: f64) -> f64 {
    if window_hours <= 24.0 { 5.0 } else { 10.0 }
}

/// Find the instant within `[sub_start, sub_end)` at which `f` first
/// crosses `target_deg`, assuming `f` moves monotonically through a
/// single 30° span over that sub-interval (true between two consecutive
/// ascendant flips).
fn locate_midpoint(
    f: impl Fn(Instant) -> f64,
    target_deg: f64,
    sub_start: Instant,
    sub_end: Instant,
) -> Option<Instant> {
    let classify = move |lon: f64| {
        if lon.is_nan() {
            None
        } else {
            Some(if angdiff(lon, target_deg) < 0.0 { 0i64 } else { 1i64 })
        }
    };
    scan_boundaries(f, classify, sub_start, sub_end, 1.0)
        .into_iter()
        .next()
        .map(|b| b.instant)
}

/// Every ascendant flip within `[window_start, window_end)`, each with an
/// auxiliary "+15°" midpoint marker located within the sub-interval
/// leading to the next flip (or to `window_end` for the last one).
pub fn ascendant_flips(
    lat_deg: f64,
    lon_deg: f64,
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<AscendantFlip> {
    let window_hours = window_end.diff_seconds(window_start) / 3600.0;
    let step = coarse_step_minutes(window_hours);

    let f = move |t: Instant| ascendant(t, lat_deg, lon_deg, ayanamsa);
    let classify = |lon: f64| {
        if lon.is_nan() {
            None
        } else {
            Some(sign_index(lon) as i64)
        }
    };

    let boundaries = scan_boundaries(f, classify, window_start, window_end, step);

    let mut out = Vec::with_capacity(boundaries.len());
    for (i, b) in boundaries.iter().enumerate() {
        let sub_end = boundaries.get(i + 1).map(|n| n.instant).unwrap_or(window_end);
        let to_sign = b.to_class as u8;
        let target_deg = to_sign as f64 * 30.0 + 15.0;

        let midpoint_instant = if sub_end.diff_seconds(b.instant) > 0.0 {
            let f = move |t: Instant| ascendant(t, lat_deg, lon_deg, ayanamsa);
            locate_midpoint(f, target_deg, b.instant, sub_end)
        } else {
            None
        };

        out.push(AscendantFlip {
            instant: b.instant,
            from_sign: b.from_class as u8,
            to_sign,
            midpoint_instant,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(n: i64) -> Instant {
        Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0).plus_seconds((n * 3600) as f64)
    }

    #[test]
    fn flips_occur_roughly_every_two_hours() {
        let flips = ascendant_flips(19.076, 72.877, Ayanamsa::Lahiri, hour(0), hour(24));
        // 12 signs rise over one sidereal day (~24h), so roughly 12 flips
        assert!(flips.len() >= 10 && flips.len() <= 14, "got {}", flips.len());
    }

    #[test]
    fn each_flip_has_a_midpoint_within_its_own_span() {
        let flips = ascendant_flips(19.076, 72.877, Ayanamsa::Lahiri, hour(0), hour(24));
        for (i, flip) in flips.iter().enumerate() {
            assert_ne!(flip.from_sign, flip.to_sign);
            if let Some(mid) = flip.midpoint_instant {
                assert!(mid.diff_seconds(flip.instant) >= 0.0);
                if let Some(next) = flips.get(i + 1) {
                    assert!(mid.diff_seconds(next.instant) < 0.0);
                }
            }
        }
    }
}

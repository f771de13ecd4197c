//! Velocity-extremum detector: local maxima/minima of a body's signed
//! longitudinal speed.

use panch_ephemeris::{Ayanamsa, Body, longitude_and_speed};
use panch_scanner::parabolic_vertex;
use panch_time::Instant;

use crate::types::VelocityExtremum;

const HALF_WINDOW_SECONDS: f64 = 6.0 * 3600.0;
const DEDUP_SECONDS: f64 = 6.0 * 60.0;
const DEDUP_SPEED_DEG_PER_DAY: f64 = 1e-4;

/// Coarse traversal step, in minutes, for tracking `body`'s speed.
fn coarse_step_minutes(body: Body) -> f64 {
    match body {
        Body::Moon => 5.0,
        Body::Mercury => 10.0,
        Body::Venus => 15.0,
        Body::Sun => 30.0,
        Body::Mars => 60.0,
        Body::Jupiter | Body::Saturn => 120.0,
        Body::Uranus | Body::Neptune | Body::Pluto => 240.0,
        Body::Rahu | Body::Ketu => 60.0,
    }
}

fn sampled_speeds(
    body: Body,
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<(Instant, f64)> {
    let step_seconds = coarse_step_minutes(body) * 60.0;
    let mut samples = Vec::new();
    let mut t = window_start;
    loop {
        let speed = longitude_and_speed(body, t, ayanamsa).1;
        samples.push((t, speed));
        if t.diff_seconds(window_end) >= 0.0 {
            break;
        }
        let next = t.plus_seconds(step_seconds);
        t = if next.diff_seconds(window_end) > 0.0 { window_end } else { next };
    }
    samples
}

fn clamp_to(candidate: Instant, lo: Instant, hi: Instant) -> Instant {
    if candidate.diff_seconds(lo) < 0.0 {
        lo
    } else if candidate.diff_seconds(hi) > 0.0 {
        hi
    } else {
        candidate
    }
}

/// Every velocity extremum for `body` within `[window_start, window_end)`,
/// parabolically refined and deduplicated against near-identical
/// re-detections of the same turning point.
pub fn velocity_extrema(
    body: Body,
    ayanamsa: Ayanamsa,
    window_start: Instant,
    window_end: Instant,
) -> Vec<VelocityExtremum> {
    let samples = sampled_speeds(body, ayanamsa, window_start, window_end);

    let mut raw: Vec<(VelocityExtremum, f64)> = Vec::new();
    for w in samples.windows(3) {
        let (t_prev, s_prev) = w[0];
        let (t_cur, s_cur) = w[1];
        let (t_next, s_next) = w[2];
        if !(s_prev.is_finite() && s_cur.is_finite() && s_next.is_finite()) {
            continue;
        }
        let is_max = s_cur > s_prev && s_cur > s_next;
        let is_min = s_cur < s_prev && s_cur < s_next;
        if !is_max && !is_min {
            continue;
        }

        let left_t = clamp_to(t_cur.plus_seconds(-HALF_WINDOW_SECONDS), t_prev, t_cur);
        let right_t = clamp_to(t_cur.plus_seconds(HALF_WINDOW_SECONDS), t_cur, t_next);
        let left_speed = longitude_and_speed(body, left_t, ayanamsa).1;
        let right_speed = longitude_and_speed(body, right_t, ayanamsa).1;
        if !(left_speed.is_finite() && right_speed.is_finite()) {
            continue;
        }

        if let Some(v) = parabolic_vertex((left_t, left_speed), (t_cur, s_cur), (right_t, right_speed)) {
            raw.push((
                VelocityExtremum {
                    body,
                    instant: v.instant,
                    signed_speed_deg_per_day: v.value,
                    kind: v.kind,
                },
                v.curvature.abs(),
            ));
        }
    }

    let mut out: Vec<(VelocityExtremum, f64)> = Vec::new();
    for (candidate, curvature) in raw {
        if let Some((prev, prev_curvature)) = out.last_mut() {
            let close_in_time =
                candidate.instant.diff_seconds(prev.instant).abs() < DEDUP_SECONDS;
            let close_in_speed = (candidate.signed_speed_deg_per_day
                - prev.signed_speed_deg_per_day)
                .abs()
                < DEDUP_SPEED_DEG_PER_DAY;
            if close_in_time && close_in_speed {
                if curvature > *prev_curvature {
                    *prev = candidate;
                    *prev_curvature = curvature;
                }
                continue;
            }
        }
        out.push((candidate, curvature));
    }

    out.into_iter().map(|(e, _)| e).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use panch_scanner::ExtremumKind;

    fn day(n: i64) -> Instant {
        Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0).plus_seconds((n * 86_400) as f64)
    }

    #[test]
    fn mercury_has_extrema_around_each_station() {
        let events = velocity_extrema(Body::Mercury, Ayanamsa::Lahiri, day(0), day(365));
        assert!(!events.is_empty());
        for e in &events {
            assert!(e.signed_speed_deg_per_day.is_finite());
        }
    }

    #[test]
    fn extrema_are_classified_as_max_or_min() {
        let events = velocity_extrema(Body::Mercury, Ayanamsa::Lahiri, day(0), day(200));
        assert!(!events.is_empty());
        for e in &events {
            assert!(matches!(e.kind, ExtremumKind::Max | ExtremumKind::Min));
        }
    }

    #[test]
    fn events_are_time_ordered() {
        let events = velocity_extrema(Body::Venus, Ayanamsa::Raman, day(0), day(365));
        for w in events.windows(2) {
            assert!(w[1].instant.diff_seconds(w[0].instant) >= 0.0);
        }
    }
}

//! Generic classification-boundary scanner.
//!
//! Longitude is modular, so doing `f(a) - f(b)` and looking for a zero is
//! unsound near the 360°↔0° wrap. This scanner works on *classification
//! indices* (sign bin, segment bin, sign of speed) instead, and bisects on
//! classification change rather than on the raw function value — the
//! robustness choice this whole crate exists for.

use std::collections::HashMap;

use panch_time::Instant;

/// Maximum bisection iterations before giving up on narrowing further.
const MAX_BISECTION_ITERATIONS: u32 = 60;
/// Bisection stops once the bracket is this narrow.
const BISECTION_TARGET_SECONDS: f64 = 1.0;
/// Hysteresis half-width: classification is re-checked this many seconds
/// on either side of a refined boundary.
const HYSTERESIS_SECONDS: f64 = 1.0;
/// Two emissions of the same (from, to) transition within this many
/// seconds of each other are considered the same event.
const DEDUP_SECONDS: f64 = 5.0;
/// Seeding gives up after this many coarse steps without a finite sample.
const MAX_SEED_STEPS: u32 = 10;

/// A detected classification-boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub instant: Instant,
    pub from_class: i64,
    pub to_class: i64,
}

/// Scan `f` over `[window_start, window_end)`, classifying each sample with
/// `classify` (returning `None` for an unclassifiable/NaN sample), and
/// return every classification-boundary crossing found, in time order.
///
/// `step_minutes` is the coarse traversal step; see the per-event-family
/// coarse-step policies for recommended values (ascendant flips, pada
/// changes, sign ingresses, stations, combustion, velocity extrema each
/// have their own).
pub fn scan_boundaries(
    f: impl Fn(Instant) -> f64,
    classify: impl Fn(f64) -> Option<i64>,
    window_start: Instant,
    window_end: Instant,
    step_minutes: f64,
) -> Vec<Boundary> {
    let step_seconds = step_minutes * 60.0;

    let mut seed_t = window_start;
    let mut last_known: Option<(Instant, i64)> = None;
    for _ in 0..MAX_SEED_STEPS {
        if seed_t.diff_seconds(window_end) >= 0.0 {
            break;
        }
        if let Some(c) = classify(f(seed_t)) {
            last_known = Some((seed_t, c));
            break;
        }
        seed_t = seed_t.plus_seconds(step_seconds);
    }

    let Some((mut prev_t, mut prev_class)) = last_known else {
        return Vec::new();
    };

    let mut boundaries = Vec::new();
    let mut last_emitted: HashMap<(i64, i64), Instant> = HashMap::new();

    let mut t = prev_t;
    while t.diff_seconds(window_end) < 0.0 {
        let next_t = if t.plus_seconds(step_seconds).diff_seconds(window_end) > 0.0 {
            window_end
        } else {
            t.plus_seconds(step_seconds)
        };
        if next_t.diff_seconds(t) <= 0.0 {
            break;
        }

        let next_val = f(next_t);
        if let Some(next_class) = classify(next_val) {
            if next_class != prev_class {
                let boundary_instant =
                    bisect_boundary(&f, &classify, prev_t, next_t, prev_class);

                if hysteresis_holds(&f, &classify, boundary_instant, prev_class, next_class) {
                    let key = (prev_class, next_class);
                    let should_emit = match last_emitted.get(&key) {
                        Some(&prev_emit) => {
                            boundary_instant.diff_seconds(prev_emit).abs() >= DEDUP_SECONDS
                        }
                        None => true,
                    };
                    if should_emit {
                        last_emitted.insert(key, boundary_instant);
                        boundaries.push(Boundary {
                            instant: boundary_instant,
                            from_class: prev_class,
                            to_class: next_class,
                        });
                    }
                }
            }
            prev_t = next_t;
            prev_class = next_class;
        }
        // A NaN sample at next_t: skip it, keep prev_class, keep scanning.

        t = next_t;
    }

    boundaries
}

/// Bisect the bracket `[lo, hi]` (where `f(lo)` classifies as `class_lo`)
/// to locate the classification boundary to `BISECTION_TARGET_SECONDS`
/// resolution, comparing classification indices only — never the raw
/// (modular) function value.
fn bisect_boundary(
    f: &impl Fn(Instant) -> f64,
    classify: &impl Fn(f64) -> Option<i64>,
    lo: Instant,
    hi: Instant,
    class_lo: i64,
) -> Instant {
    let mut t_lo = lo;
    let mut t_hi = hi;

    for _ in 0..MAX_BISECTION_ITERATIONS {
        if t_hi.diff_seconds(t_lo) <= BISECTION_TARGET_SECONDS {
            break;
        }
        let mid = t_lo.plus_seconds(t_hi.diff_seconds(t_lo) / 2.0);
        match classify(f(mid)) {
            Some(c) if c == class_lo => t_lo = mid,
            _ => t_hi = mid,
        }
    }

    t_lo.plus_seconds(t_hi.diff_seconds(t_lo) / 2.0)
}

/// Evaluate `f` at `boundary ± HYSTERESIS_SECONDS` and require both sides
/// to match the detected transition; guards against single-sample NaN
/// artefacts and noise right at the boundary.
fn hysteresis_holds(
    f: &impl Fn(Instant) -> f64,
    classify: &impl Fn(f64) -> Option<i64>,
    boundary: Instant,
    from_class: i64,
    to_class: i64,
) -> bool {
    let before = classify(f(boundary.plus_seconds(-HYSTERESIS_SECONDS)));
    let after = classify(f(boundary.plus_seconds(HYSTERESIS_SECONDS)));
    before == Some(from_class) && after == Some(to_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(n: i64) -> Instant {
        Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0).plus_seconds((n * 60) as f64)
    }

    /// A sawtooth classification function: bin index increases by 1 every
    /// 100 minutes, like a body crawling through sign bins.
    fn sawtooth(t: Instant) -> f64 {
        let elapsed_min = t.diff_seconds(minutes(0)) / 60.0;
        elapsed_min / 100.0
    }

    fn floor_classify(v: f64) -> Option<i64> {
        Some(v.floor() as i64)
    }

    #[test]
    fn detects_sequential_boundaries() {
        let start = minutes(0);
        let end = minutes(1000);
        let boundaries = scan_boundaries(sawtooth, floor_classify, start, end, 10.0);
        assert!(boundaries.len() >= 8);
        for w in boundaries.windows(2) {
            assert!(w[1].instant.diff_seconds(w[0].instant) > 0.0);
            assert_eq!(w[0].to_class, w[1].from_class);
        }
    }

    #[test]
    fn boundary_lands_near_expected_instant() {
        let start = minutes(0);
        let end = minutes(250);
        let boundaries = scan_boundaries(sawtooth, floor_classify, start, end, 10.0);
        assert!(!boundaries.is_empty());
        let first = boundaries[0];
        // sawtooth crosses 1.0 at elapsed_min = 100
        let expected = minutes(100);
        assert!(
            first.instant.diff_seconds(expected).abs() < 2.0,
            "boundary at {:?}, expected near {:?}",
            first.instant,
            expected
        );
        assert_eq!(first.from_class, 0);
        assert_eq!(first.to_class, 1);
    }

    #[test]
    fn empty_window_returns_nothing() {
        let start = minutes(0);
        let result = scan_boundaries(sawtooth, floor_classify, start, start, 10.0);
        assert!(result.is_empty());
    }

    #[test]
    fn all_nan_returns_nothing() {
        let start = minutes(0);
        let end = minutes(500);
        let result = scan_boundaries(|_| f64::NAN, |_| None, start, end, 10.0);
        assert!(result.is_empty());
    }

    #[test]
    fn dedup_suppresses_close_repeat_transitions() {
        // A function that oscillates right at a boundary, forcing the same
        // (from, to) transition to be detected twice within 5 seconds.
        let start = minutes(0);
        let end = minutes(20);
        let f = |t: Instant| {
            let s = t.diff_seconds(start);
            if s < 599.0 {
                0.5
            } else if s < 601.0 {
                1.5
            } else if s < 603.0 {
                0.5
            } else {
                1.5
            }
        };
        let classify = |v: f64| Some(v.floor() as i64);
        let boundaries = scan_boundaries(f, classify, start, end, 0.1);
        let zero_to_one: Vec<_> = boundaries
            .iter()
            .filter(|b| b.from_class == 0 && b.to_class == 1)
            .collect();
        assert!(zero_to_one.len() <= 1, "expected dedup, got {zero_to_one:?}");
    }

    #[test]
    fn seeding_skips_leading_nan() {
        let start = minutes(0);
        let end = minutes(300);
        let f = |t: Instant| {
            let s = t.diff_seconds(start);
            if s < 120.0 { f64::NAN } else { sawtooth(t) }
        };
        let boundaries = scan_boundaries(f, floor_classify, start, end, 10.0);
        assert!(!boundaries.is_empty());
    }
}

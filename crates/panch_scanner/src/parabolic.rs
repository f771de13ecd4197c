//! Parabolic vertex refinement for locating velocity extrema.
//!
//! Speed is smooth between stations, so three samples bracketing an
//! extremum (left, hint, right) can be fit to `y = a*x^2 + b*x + c` and
//! the vertex read off directly; curvature sign distinguishes a local
//! maximum (`a < 0`) from a minimum (`a > 0`).

use panch_time::Instant;
use serde::{Deserialize, Serialize};

/// Whether a refined extremum is a local maximum or minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumKind {
    Max,
    Min,
}

/// Result of parabolic vertex refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub instant: Instant,
    pub value: f64,
    pub kind: ExtremumKind,
    /// The fitted quadratic's leading coefficient, `a`. Its sign gives
    /// [`ExtremumKind`]; its magnitude is how sharply peaked the
    /// extremum is, useful for tie-breaking near-duplicate detections.
    pub curvature: f64,
}

/// Fit a parabola through three samples `(t, y)` and return its vertex,
/// clamped to `[left.0, right.0]`.
///
/// `left`, `hint`, and `right` need not be evenly spaced. Returns `None`
/// if the three `t` values are not distinct (degenerate fit) or the fit
/// is exactly linear (`a == 0`, no extremum).
pub fn parabolic_vertex(
    left: (Instant, f64),
    hint: (Instant, f64),
    right: (Instant, f64),
) -> Option<Extremum> {
    let (t0, y0) = left;
    let (t1, y1) = hint;
    let (t2, y2) = right;

    // Work in seconds relative to t1 for numerical stability.
    let x0 = t0.diff_seconds(t1);
    let x1 = 0.0_f64;
    let x2 = t2.diff_seconds(t1);

    if x0 == x1 || x1 == x2 || x0 == x2 {
        return None;
    }

    // Lagrange-basis solve for y = a*x^2 + b*x + c through the three points.
    let denom = (x0 - x1) * (x0 - x2) * (x1 - x2);
    if denom == 0.0 {
        return None;
    }

    let a = (x2 * (y1 - y0) + x1 * (y0 - y2) + x0 * (y2 - y1)) / denom;
    if a == 0.0 {
        return None;
    }
    let b = (x2 * x2 * (y0 - y1) + x1 * x1 * (y2 - y0) + x0 * x0 * (y1 - y2)) / denom;
    let c = y1;

    let vertex_x = -b / (2.0 * a);
    let clamped_x = vertex_x.clamp(x0.min(x2), x0.max(x2));
    let vertex_instant = t1.plus_seconds(clamped_x);
    let vertex_y = a * clamped_x * clamped_x + b * clamped_x + c;

    let kind = if a < 0.0 {
        ExtremumKind::Max
    } else {
        ExtremumKind::Min
    };

    Some(Extremum {
        instant: vertex_instant,
        value: vertex_y,
        kind,
        curvature: a,
    })
}

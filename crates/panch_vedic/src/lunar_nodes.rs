//! Mean and true lunar node (Rahu/Ketu) longitude.
//!
//! Rahu is the Moon's ascending node, whose mean longitude regresses
//! uniformly (~19.34 deg/year) through the Delaunay `Omega` term already
//! used for nutation. Ketu is always exactly opposite Rahu.

use panch_frames::fundamental_arguments;

/// Which lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// North node (ascending node of the Moon's orbit).
    Rahu,
    /// South node, always `Rahu + 180 deg`.
    Ketu,
}

impl LunarNode {
    pub const fn all() -> &'static [LunarNode] {
        &[LunarNode::Rahu, LunarNode::Ketu]
    }
}

/// Mean vs. true (perturbed) node longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeMode {
    /// Uniform regression, no periodic perturbation.
    Mean,
    /// Mean plus the dominant periodic (evection-like) perturbation.
    True,
}

impl NodeMode {
    pub const fn all() -> &'static [NodeMode] {
        &[NodeMode::Mean, NodeMode::True]
    }
}

fn norm360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Mean Rahu longitude in degrees at TDB centuries `t`.
///
/// This is simply the Delaunay `Omega` fundamental argument, reduced to
/// `[0, 360)`.
pub fn mean_rahu_deg(t: f64) -> f64 {
    norm360(fundamental_arguments(t).omega)
}

/// Mean Ketu longitude, always `mean_rahu_deg(t) + 180`.
pub fn mean_ketu_deg(t: f64) -> f64 {
    norm360(mean_rahu_deg(t) + 180.0)
}

/// True (perturbed) Rahu longitude in degrees at TDB centuries `t`.
///
/// Adds the dominant periodic correction to the mean node (amplitude
/// ~1.4 deg, argument `2F`, after the low-order lunar node perturbation
/// theory) — enough to separate "true" from "mean" without claiming
/// full ephemeris-grade node perturbation accuracy.
pub fn true_rahu_deg(t: f64) -> f64 {
    let fa = fundamental_arguments(t);
    let f_rad = fa.f.to_radians();
    let perturbation_deg = -1.4979 * (2.0 * f_rad).sin();
    norm360(mean_rahu_deg(t) + perturbation_deg)
}

/// True Ketu longitude, always `true_rahu_deg(t) + 180`.
pub fn true_ketu_deg(t: f64) -> f64 {
    norm360(true_rahu_deg(t) + 180.0)
}

/// Unified entry point for node longitude.
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    match (node, mode) {
        (LunarNode::Rahu, NodeMode::Mean) => mean_rahu_deg(t),
        (LunarNode::Ketu, NodeMode::Mean) => mean_ketu_deg(t),
        (LunarNode::Rahu, NodeMode::True) => true_rahu_deg(t),
        (LunarNode::Ketu, NodeMode::True) => true_ketu_deg(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_j2000_approx_125_04() {
        let deg = mean_rahu_deg(0.0);
        assert!((deg - 125.044).abs() < 0.01, "mean Rahu at J2000 = {deg}");
    }

    #[test]
    fn regression_rate_approx_19_34_per_year() {
        let r0 = mean_rahu_deg(0.0);
        let r1 = mean_rahu_deg(0.01);
        let mut diff = r1 - r0;
        if diff > 180.0 {
            diff -= 360.0;
        }
        if diff < -180.0 {
            diff += 360.0;
        }
        assert!((diff - (-19.34)).abs() < 0.5, "1-year regression = {diff}");
    }

    #[test]
    fn ketu_always_opposite_rahu_mean() {
        for &t in &[-2.0, -1.0, 0.0, 0.24, 1.0, 5.0] {
            let rahu = mean_rahu_deg(t);
            let ketu = mean_ketu_deg(t);
            let diff = norm360(ketu - rahu);
            assert!((diff - 180.0).abs() < 1e-9, "t={t}: Ketu-Rahu = {diff}");
        }
    }

    #[test]
    fn ketu_always_opposite_rahu_true() {
        for &t in &[-2.0, -1.0, 0.0, 0.24, 1.0, 5.0] {
            let rahu = true_rahu_deg(t);
            let ketu = true_ketu_deg(t);
            let diff = norm360(ketu - rahu);
            assert!(
                (diff - 180.0).abs() < 1e-9,
                "t={t}: true Ketu-Rahu = {diff}"
            );
        }
    }

    #[test]
    fn true_node_perturbation_is_small_and_nonzero() {
        for &t in &[0.0, 0.24, -1.0, 2.0] {
            let mean = mean_rahu_deg(t);
            let tr = true_rahu_deg(t);
            let mut diff = (tr - mean).abs();
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < 3.0, "t={t}: |true - mean| = {diff}");
        }
    }

    #[test]
    fn unified_api_matches_direct_calls() {
        let t = 0.24;
        assert_eq!(lunar_node_deg(LunarNode::Rahu, t, NodeMode::Mean), mean_rahu_deg(t));
        assert_eq!(lunar_node_deg(LunarNode::Ketu, t, NodeMode::Mean), mean_ketu_deg(t));
        assert_eq!(lunar_node_deg(LunarNode::Rahu, t, NodeMode::True), true_rahu_deg(t));
        assert_eq!(lunar_node_deg(LunarNode::Ketu, t, NodeMode::True), true_ketu_deg(t));
    }

    #[test]
    fn all_outputs_in_valid_range() {
        for &t in &[-10.0, -1.0, 0.0, 1.0, 10.0] {
            for &node in LunarNode::all() {
                for &mode in NodeMode::all() {
                    let deg = lunar_node_deg(node, t, mode);
                    assert!((0.0..360.0).contains(&deg), "node={node:?} mode={mode:?} t={t}: {deg}");
                }
            }
        }
    }
}

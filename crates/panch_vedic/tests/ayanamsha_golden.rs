//! Golden-value tests for ayanamsha against published almanac values.
//!
//! No kernel files needed — ayanamsha depends only on the precession
//! polynomial (pure math).

use panch_vedic::{AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, jd_tdb_to_centuries};

fn jd_from_date(year: i32, month: u32, day: u32) -> f64 {
    panch_time::calendar_to_jd(year, month, day as f64)
}

#[test]
fn lahiri_at_j2000() {
    let t = jd_tdb_to_centuries(2_451_545.0); // J2000.0
    let val = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, t);
    assert!(
        (val - 23.857_052_898_247_307).abs() < 1e-12,
        "Lahiri at J2000 = {val}, expected calibrated reference"
    );
}

#[test]
fn lahiri_at_2024() {
    let jd = jd_from_date(2024, 1, 1);
    let t = jd_tdb_to_centuries(jd);
    let val = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, t);
    assert!(
        (val - 24.201).abs() < 0.05,
        "Lahiri at 2024-01-01 = {val}, expected ~24.20"
    );
}

#[test]
fn lahiri_true_at_1956_matches_gazette() {
    let jd_tdt = 2_435_553.5;
    let t = jd_tdb_to_centuries(jd_tdt);
    let val = ayanamsha_deg(AyanamshaSystem::Lahiri, t, true);
    let gazette = 23.0 + 15.0 / 60.0 + 0.658 / 3600.0;
    assert!(
        (val - gazette).abs() < 1e-6,
        "Lahiri true at 1956 = {val}, gazette = {gazette}"
    );
}

#[test]
fn raman_at_j2000() {
    let val = ayanamsha_mean_deg(AyanamshaSystem::Raman, 0.0);
    assert!(
        (val - 22.37).abs() < 0.02,
        "Raman at J2000 = {val}, expected ~22.37"
    );
}

#[test]
fn tropical_has_no_offset_at_any_epoch() {
    for t in [-5.0, 0.0, 0.24, 10.0] {
        assert_eq!(ayanamsha_mean_deg(AyanamshaSystem::Tropical, t), 0.0);
        assert_eq!(ayanamsha_deg(AyanamshaSystem::Tropical, t, true), 0.0);
    }
}

#[test]
fn sidereal_systems_increase_over_century() {
    for sys in [AyanamshaSystem::Lahiri, AyanamshaSystem::Raman] {
        let at_0 = ayanamsha_mean_deg(sys, 0.0);
        let at_1 = ayanamsha_mean_deg(sys, 1.0);
        let diff = at_1 - at_0;
        assert!(
            (diff - 1.397).abs() < 0.01,
            "{sys:?}: century drift = {diff}, expected ~1.397"
        );
    }
}

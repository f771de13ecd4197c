//! Built-in low-precision ephemeris, used when no kernel file can be found.
//!
//! Planets (Mercury..Pluto) use the Standish (1992) mean Keplerian elements
//! for the major planets, valid to roughly arc-minute precision over
//! 1800-2050 — the same public-domain "approximate positions" table widely
//! reproduced in astronomy references. The Moon uses a truncated (11-term)
//! geocentric longitude series after Meeus, "Astronomical Algorithms" ch.
//! 47's introductory low-precision formula. This is explicitly a fallback:
//! it trades several arc-minutes of accuracy for having no file
//! dependency at all.

use std::f64::consts::TAU;

use crate::backend::EphemerisBackend;

/// Mean orbital elements and their per-Julian-century rates, J2000.0 epoch.
struct Elements {
    a0: f64,
    a_dot: f64,
    e0: f64,
    e_dot: f64,
    i0_deg: f64,
    i_dot: f64,
    l0_deg: f64,
    l_dot: f64,
    peri0_deg: f64,
    peri_dot: f64,
    node0_deg: f64,
    node_dot: f64,
}

const MERCURY: Elements = Elements {
    a0: 0.387_099_27, a_dot: 0.000_000_37,
    e0: 0.205_635_93, e_dot: 0.000_019_06,
    i0_deg: 7.004_979_02, i_dot: -0.005_947_49,
    l0_deg: 252.250_323_50, l_dot: 149_472.674_111_75,
    peri0_deg: 77.457_796_28, peri_dot: 0.160_476_89,
    node0_deg: 48.330_765_93, node_dot: -0.125_340_81,
};

const VENUS: Elements = Elements {
    a0: 0.723_335_66, a_dot: 0.000_003_90,
    e0: 0.006_776_72, e_dot: -0.000_041_07,
    i0_deg: 3.394_676_05, i_dot: -0.000_788_90,
    l0_deg: 181.979_099_50, l_dot: 58_517.815_387_29,
    peri0_deg: 131.602_467_18, peri_dot: 0.002_683_29,
    node0_deg: 76.679_842_55, node_dot: -0.277_694_18,
};

const EARTH: Elements = Elements {
    a0: 1.000_002_61, a_dot: 0.000_005_62,
    e0: 0.016_711_23, e_dot: -0.000_043_92,
    i0_deg: -0.000_015_31, i_dot: -0.012_946_68,
    l0_deg: 100.464_571_66, l_dot: 35_999.372_449_81,
    peri0_deg: 102.937_681_93, peri_dot: 0.323_273_64,
    node0_deg: 0.0, node_dot: 0.0,
};

const MARS: Elements = Elements {
    a0: 1.523_710_34, a_dot: 0.000_018_47,
    e0: 0.093_394_10, e_dot: 0.000_078_82,
    i0_deg: 1.849_691_42, i_dot: -0.008_131_31,
    l0_deg: -4.553_432_05, l_dot: 19_140.302_684_99,
    peri0_deg: -23.943_629_59, peri_dot: 0.444_410_88,
    node0_deg: 49.559_538_91, node_dot: -0.292_573_43,
};

const JUPITER: Elements = Elements {
    a0: 5.202_887_00, a_dot: -0.000_116_07,
    e0: 0.048_386_24, e_dot: -0.000_132_53,
    i0_deg: 1.304_396_95, i_dot: -0.001_837_14,
    l0_deg: 34.396_440_51, l_dot: 3_034.746_127_75,
    peri0_deg: 14.728_479_83, peri_dot: 0.212_526_68,
    node0_deg: 100.473_909_09, node_dot: 0.204_691_06,
};

const SATURN: Elements = Elements {
    a0: 9.536_675_94, a_dot: -0.001_250_60,
    e0: 0.053_861_79, e_dot: -0.000_509_91,
    i0_deg: 2.485_991_87, i_dot: 0.001_936_09,
    l0_deg: 49.954_244_23, l_dot: 1_222.493_622_01,
    peri0_deg: 92.598_878_31, peri_dot: -0.418_972_16,
    node0_deg: 113.662_424_48, node_dot: -0.288_677_94,
};

const URANUS: Elements = Elements {
    a0: 19.189_164_64, a_dot: -0.001_961_76,
    e0: 0.047_257_44, e_dot: -0.000_043_97,
    i0_deg: 0.772_637_83, i_dot: -0.002_429_39,
    l0_deg: 313.238_104_51, l_dot: 428.482_027_85,
    peri0_deg: 170.954_276_30, peri_dot: 0.408_052_81,
    node0_deg: 74.016_925_03, node_dot: 0.042_405_89,
};

const NEPTUNE: Elements = Elements {
    a0: 30.069_922_76, a_dot: 0.000_262_91,
    e0: 0.008_590_48, e_dot: 0.000_051_05,
    i0_deg: 1.770_043_47, i_dot: 0.000_353_72,
    l0_deg: -55.120_029_69, l_dot: 218.459_453_25,
    peri0_deg: 44.964_762_27, peri_dot: -0.322_414_64,
    node0_deg: 131.784_225_74, node_dot: -0.005_086_64,
};

const PLUTO: Elements = Elements {
    a0: 39.482_116_75, a_dot: -0.000_315_96,
    e0: 0.248_827_30, e_dot: 0.000_051_70,
    i0_deg: 17.140_012_06, i_dot: 0.000_048_18,
    l0_deg: 238.929_038_33, l_dot: 145.207_805_15,
    peri0_deg: 224.068_916_29, peri_dot: -0.040_629_42,
    node0_deg: 110.303_936_84, node_dot: -0.011_834_82,
};

fn deg_to_rad(d: f64) -> f64 {
    d.to_radians()
}

/// Solve Kepler's equation `M = E - e*sin(E)` for `E`, given `M` in radians.
fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad.rem_euclid(TAU);
    let mut ecc = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let f = ecc - e * ecc.sin() - m;
        let f_prime = 1.0 - e * ecc.cos();
        let delta = f / f_prime;
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric ecliptic-J2000 position (AU) of a body described by
/// Keplerian elements at `t_centuries` Julian centuries from J2000.0.
fn heliocentric_position_au(el: &Elements, t_centuries: f64) -> [f64; 3] {
    let a = el.a0 + el.a_dot * t_centuries;
    let e = el.e0 + el.e_dot * t_centuries;
    let i = deg_to_rad(el.i0_deg + el.i_dot * t_centuries);
    let l = deg_to_rad(el.l0_deg + el.l_dot * t_centuries);
    let peri = deg_to_rad(el.peri0_deg + el.peri_dot * t_centuries);
    let node = deg_to_rad(el.node0_deg + el.node_dot * t_centuries);

    let mean_anomaly = l - peri;
    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    let x_orb = a * (ecc_anomaly.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let w = peri - node;
    let (sin_w, cos_w) = w.sin_cos();
    let (sin_node, cos_node) = node.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    let x = (cos_w * cos_node - sin_w * sin_node * cos_i) * x_orb
        + (-sin_w * cos_node - cos_w * sin_node * cos_i) * y_orb;
    let y = (cos_w * sin_node + sin_w * cos_node * cos_i) * x_orb
        + (-sin_w * sin_node + cos_w * cos_node * cos_i) * y_orb;
    let z = (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb;

    [x, y, z]
}

fn norm360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

fn geocentric_ecliptic_longitude_deg(naif_code: i32, t_centuries: f64) -> Option<f64> {
    let elements = match naif_code {
        199 => &MERCURY,
        299 => &VENUS,
        499 => &MARS,
        599 => &JUPITER,
        699 => &SATURN,
        799 => &URANUS,
        899 => &NEPTUNE,
        999 => &PLUTO,
        10 => {
            // Geocentric Sun = -(Earth's heliocentric position).
            let earth = heliocentric_position_au(&EARTH, t_centuries);
            let geo = [-earth[0], -earth[1], -earth[2]];
            return Some(norm360(geo[1].atan2(geo[0]).to_degrees()));
        }
        301 => return Some(moon_longitude_deg(t_centuries)),
        _ => return None,
    };

    let body_helio = heliocentric_position_au(elements, t_centuries);
    let earth_helio = heliocentric_position_au(&EARTH, t_centuries);
    let geo = [
        body_helio[0] - earth_helio[0],
        body_helio[1] - earth_helio[1],
        body_helio[2] - earth_helio[2],
    ];
    Some(norm360(geo[1].atan2(geo[0]).to_degrees()))
}

/// Truncated (11-term) Moon geocentric ecliptic longitude, after Meeus ch. 47.
fn moon_longitude_deg(t_centuries: f64) -> f64 {
    let t = t_centuries;
    let l0 = 218.3164477 + 481_267.88123421 * t;
    let d = deg_to_rad(norm360(297.8501921 + 445_267.1114034 * t));
    let m = deg_to_rad(norm360(357.5291092 + 35_999.0502909 * t));
    let mp = deg_to_rad(norm360(134.9633964 + 477_198.8675055 * t));
    let f = deg_to_rad(norm360(93.2720950 + 483_202.0175233 * t));

    let dl = 6.289 * mp.sin()
        - 1.274 * (2.0 * d - mp).sin()
        + 0.658 * (2.0 * d).sin()
        - 0.186 * m.sin()
        - 0.059 * (2.0 * d - 2.0 * mp).sin()
        - 0.057 * (2.0 * d - mp - m).sin()
        + 0.053 * (2.0 * d + mp).sin()
        + 0.046 * (2.0 * d - m).sin()
        + 0.041 * (mp - m).sin()
        - 0.035 * d.sin()
        - 0.031 * (mp + m).sin();

    let _ = f; // latitude-only terms are out of scope for longitude
    norm360(l0 + dl)
}

/// Fallback ephemeris with no external file dependency.
pub struct AnalyticBackend;

impl EphemerisBackend for AnalyticBackend {
    fn tropical_longitude_and_speed(&self, naif_code: i32, jd_ut: f64) -> (f64, f64) {
        const J2000_JD: f64 = 2_451_545.0;
        let t = (jd_ut - J2000_JD) / 36_525.0;

        let Some(lon) = geocentric_ecliptic_longitude_deg(naif_code, t) else {
            return (f64::NAN, f64::NAN);
        };

        // Central difference for speed; ±1 minute is enough to resolve
        // the sign and magnitude of longitudinal speed for every tracked
        // body without hand-differentiating each periodic term.
        const DT_DAYS: f64 = 1.0 / 1440.0;
        let t_minus = t - DT_DAYS / 36_525.0;
        let t_plus = t + DT_DAYS / 36_525.0;
        let lon_minus = geocentric_ecliptic_longitude_deg(naif_code, t_minus).unwrap_or(f64::NAN);
        let lon_plus = geocentric_ecliptic_longitude_deg(naif_code, t_plus).unwrap_or(f64::NAN);

        let mut delta = lon_plus - lon_minus;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }
        let speed = delta / (2.0 * DT_DAYS);

        (lon, speed)
    }

    fn name(&self) -> &'static str {
        "analytic"
    }
}

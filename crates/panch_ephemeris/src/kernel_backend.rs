//! JPL DE-kernel-backed ephemeris backend.
//!
//! Computes a body's geocentric state vector by resolving both the body
//! and Earth to the solar-system barycenter and subtracting, then rotates
//! ICRF → ecliptic-J2000 and reads off longitude and longitudinal speed.

use jpl_kernel::SpkKernel;
use panch_frames::{cartesian_state_to_spherical_state, icrf_to_ecliptic};
use panch_time::J2000_JD;

use crate::backend::EphemerisBackend;

const EARTH_NAIF_CODE: i32 = 399;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Backend that reads body positions from a loaded SPK kernel.
pub struct KernelBackend {
    kernel: SpkKernel,
}

impl KernelBackend {
    pub fn new(kernel: SpkKernel) -> Self {
        Self { kernel }
    }

    fn geocentric_state_km(&self, naif_code: i32, epoch_tdb_s: f64) -> Option<([f64; 3], [f64; 3])> {
        let body = self.kernel.resolve_to_ssb(naif_code, epoch_tdb_s).ok()?;
        let earth = self.kernel.resolve_to_ssb(EARTH_NAIF_CODE, epoch_tdb_s).ok()?;

        let pos = [body[0] - earth[0], body[1] - earth[1], body[2] - earth[2]];
        let vel = [body[3] - earth[3], body[4] - earth[4], body[5] - earth[5]];
        Some((pos, vel))
    }
}

impl EphemerisBackend for KernelBackend {
    fn tropical_longitude_and_speed(&self, naif_code: i32, jd_ut: f64) -> (f64, f64) {
        let epoch_tdb_s = (jd_ut - J2000_JD) * SECONDS_PER_DAY;

        let Some((pos_icrf, vel_icrf_per_s)) = self.geocentric_state_km(naif_code, epoch_tdb_s)
        else {
            return (f64::NAN, f64::NAN);
        };

        let pos_ecl = icrf_to_ecliptic(&pos_icrf);
        let vel_ecl_per_day = {
            let v = icrf_to_ecliptic(&vel_icrf_per_s);
            [v[0] * SECONDS_PER_DAY, v[1] * SECONDS_PER_DAY, v[2] * SECONDS_PER_DAY]
        };

        let state = cartesian_state_to_spherical_state(&pos_ecl, &vel_ecl_per_day);
        (
            state.coords.lon_deg(),
            state.lon_rate_rad_per_day.to_degrees(),
        )
    }

    fn name(&self) -> &'static str {
        "kernel"
    }
}

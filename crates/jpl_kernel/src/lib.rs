//! Reads NAIF DAF/SPK binary kernel files and evaluates their Chebyshev
//! position segments to produce state vectors.
//!
//! Reference: NAIF DAF/SPK Required Reading documents (public domain,
//! US Government work product); parsing and evaluation follow those
//! specifications directly.

pub mod chebyshev;
pub mod daf;
pub mod error;
pub mod spk;

use std::path::Path;

pub use error::KernelError;
pub use spk::{SpkEvaluation, SpkSegment};

/// Map a planet body code (`x99`) onto its barycenter (`x`).
///
/// DE kernels give dedicated segments to the Sun (10), Moon (301), and
/// Earth (399), but every other planet only has a barycenter segment —
/// Mars is 499, its barycenter is 4, and so on. Codes that aren't of the
/// `x99` shape pass through unchanged.
pub fn planet_to_barycenter(code: i32) -> i32 {
    if code >= 100 && code % 100 == 99 { code / 100 } else { code }
}

/// A parsed SPK kernel, ready to be queried for state vectors.
#[derive(Debug, Clone)]
pub struct SpkKernel {
    data: Vec<u8>,
    endianness: daf::Endianness,
    segments: Vec<SpkSegment>,
}

impl SpkKernel {
    /// Read and parse a kernel file from disk.
    pub fn load(path: &Path) -> Result<Self, KernelError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Parse a kernel already held in memory (exercised directly by tests).
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, KernelError> {
        let file_record = daf::parse_file_record(&data)?;

        if file_record.nd != 2 || file_record.ni != 6 {
            return Err(KernelError::NotADaf(format!(
                "expected an SPK layout (ND=2, NI=6), found ND={} NI={}",
                file_record.nd, file_record.ni
            )));
        }

        let segments = daf::read_summaries(&data, &file_record)?
            .iter()
            .map(spk::segment_from_summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { data, endianness: file_record.endianness, segments })
    }

    /// Every segment this kernel carries.
    pub fn segments(&self) -> &[SpkSegment] {
        &self.segments
    }

    fn find_segment(&self, target: i32, center: i32, epoch_tdb_s: f64) -> Result<&SpkSegment, KernelError> {
        self.segments
            .iter()
            .find(|seg| seg.target == target && seg.center == center && (seg.start_epoch..=seg.end_epoch).contains(&epoch_tdb_s))
            .ok_or(KernelError::EpochOutOfRange { target, center, epoch_tdb_s })
    }

    /// Evaluate the (target, center) segment at `epoch_tdb_s` (TDB seconds
    /// past J2000.0), returning position (km) and velocity (km/s) in the
    /// segment's native frame — typically ICRF/J2000 for DE kernels.
    pub fn evaluate(&self, target: i32, center: i32, epoch_tdb_s: f64) -> Result<SpkEvaluation, KernelError> {
        let segment = self.find_segment(target, center, epoch_tdb_s)?;
        match segment.data_type {
            2 => spk::evaluate_type2(&self.data, segment, epoch_tdb_s, self.endianness),
            other => Err(KernelError::UnsupportedDataType(other)),
        }
    }

    /// The center body backing `target`'s first matching segment, if any.
    pub fn center_for(&self, target: i32) -> Option<i32> {
        self.segments.iter().find(|seg| seg.target == target).map(|seg| seg.center)
    }

    /// Resolve `body_code` to the solar system barycenter (code 0) by
    /// walking the chain of segment centers, summing position and
    /// velocity at each hop.
    ///
    /// A planet code without its own segment (`x99`) falls back to its
    /// barycenter (`x`) per DE kernel convention, e.g. Mars(499) resolves
    /// via MarsBarycenter(4).
    ///
    /// Returns `[x, y, z, vx, vy, vz]` in km and km/s.
    pub fn resolve_to_ssb(&self, body_code: i32, epoch_tdb_s: f64) -> Result<[f64; 6], KernelError> {
        let mut code = body_code;
        let mut state = [0.0f64; 6];

        while code != 0 {
            let center = match self.center_for(code) {
                Some(c) => c,
                None => {
                    let bary = planet_to_barycenter(code);
                    if bary != code {
                        code = bary;
                        continue;
                    }
                    return Err(KernelError::NoSuchSegment { target: code, center: -1 });
                }
            };

            let eval = self.evaluate(code, center, epoch_tdb_s)?;
            for axis in 0..3 {
                state[axis] += eval.position_km[axis];
                state[axis + 3] += eval.velocity_km_s[axis];
            }

            code = center;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_codes_map_to_their_barycenter() {
        assert_eq!(planet_to_barycenter(499), 4);
        assert_eq!(planet_to_barycenter(599), 5);
    }

    #[test]
    fn non_planet_codes_pass_through() {
        assert_eq!(planet_to_barycenter(301), 301);
        assert_eq!(planet_to_barycenter(10), 10);
        assert_eq!(planet_to_barycenter(399), 399);
    }

    #[test]
    fn short_buffer_fails_to_parse() {
        assert!(SpkKernel::from_bytes(vec![0u8; 10]).is_err());
    }
}

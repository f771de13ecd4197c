//! SPK (Spacecraft and Planet Kernel) segment descriptors and evaluation.
//!
//! Reference: NAIF SPK Required Reading (public domain, US Government
//! work product). Only Type 2 (Chebyshev, position-only) is evaluated;
//! that's the type DE421 and comparable planetary kernels ship with.

use crate::chebyshev;
use crate::daf::{DafSummary, Endianness};
use crate::error::KernelError;

/// One segment's metadata, decoded from its DAF summary.
#[derive(Debug, Clone)]
pub struct SpkSegment {
    pub start_epoch: f64,
    pub end_epoch: f64,
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub data_type: i32,
    /// First word address, 1-based, 8 bytes per word.
    pub start_addr: i32,
    /// Last word address, 1-based, 8 bytes per word.
    pub end_addr: i32,
}

/// A body's state vector at a single epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpkEvaluation {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// The four-double descriptor trailing every Type 2 segment's data.
#[derive(Debug, Clone, Copy)]
struct Type2Descriptor {
    init: f64,
    intlen: f64,
    rsize: f64,
    record_count: f64,
}

/// Decode an SPK segment descriptor (ND=2, NI=6) out of a raw DAF summary.
pub fn segment_from_summary(summary: &DafSummary) -> Result<SpkSegment, KernelError> {
    if summary.doubles.len() < 2 || summary.integers.len() < 6 {
        return Err(KernelError::MalformedSummary("SPK summary needs ND>=2, NI>=6".into()));
    }

    let d = &summary.doubles;
    let i = &summary.integers;
    Ok(SpkSegment {
        start_epoch: d[0],
        end_epoch: d[1],
        target: i[0],
        center: i[1],
        frame: i[2],
        data_type: i[3],
        start_addr: i[4],
        end_addr: i[5],
    })
}

fn type2_descriptor(data: &[u8], segment: &SpkSegment, endian: Endianness) -> Result<Type2Descriptor, KernelError> {
    // The descriptor is the last four doubles (32 bytes) of the segment.
    let end_byte = segment.end_addr as usize * 8;
    if end_byte > data.len() || end_byte < 32 {
        return Err(KernelError::MalformedRecord("segment end address extends past the file".into()));
    }
    let desc_offset = end_byte - 32;

    Ok(Type2Descriptor {
        init: endian.f64_at(data, desc_offset),
        intlen: endian.f64_at(data, desc_offset + 8),
        rsize: endian.f64_at(data, desc_offset + 16),
        record_count: endian.f64_at(data, desc_offset + 24),
    })
}

/// Evaluate an SPK Type 2 segment at `epoch_tdb_s`, returning position
/// (km) and velocity (km/s) in the segment's native reference frame.
pub fn evaluate_type2(
    data: &[u8],
    segment: &SpkSegment,
    epoch_tdb_s: f64,
    endian: Endianness,
) -> Result<SpkEvaluation, KernelError> {
    let desc = type2_descriptor(data, segment, endian)?;

    let record_count = desc.record_count as usize;
    let rsize = desc.rsize as usize;

    if rsize < 3 || !(rsize - 2).is_multiple_of(3) {
        return Err(KernelError::MalformedRecord(format!(
            "RSIZE {rsize} doesn't satisfy (RSIZE-2) mod 3 == 0"
        )));
    }
    let coeffs_per_axis = (rsize - 2) / 3;

    let record_index = (((epoch_tdb_s - desc.init) / desc.intlen).floor() as usize).min(record_count.saturating_sub(1));

    let segment_start_byte = (segment.start_addr as usize - 1) * 8;
    let record_byte = segment_start_byte + record_index * rsize * 8;
    if record_byte + rsize * 8 > data.len() {
        return Err(KernelError::MalformedRecord("Chebyshev record extends past end of file".into()));
    }

    let mid = endian.f64_at(data, record_byte);
    let radius = endian.f64_at(data, record_byte + 8);
    if radius == 0.0 {
        return Err(KernelError::MalformedRecord("record RADIUS is zero".into()));
    }

    // Rescale the epoch into the Chebyshev series' native domain [-1, 1].
    let s = (epoch_tdb_s - mid) / radius;
    let coeff_base = record_byte + 16;

    let mut position_km = [0.0; 3];
    let mut velocity_km_s = [0.0; 3];
    for (axis, (pos, vel)) in position_km.iter_mut().zip(velocity_km_s.iter_mut()).enumerate() {
        let axis_offset = coeff_base + axis * coeffs_per_axis * 8;
        let coeffs: Vec<f64> = (0..coeffs_per_axis).map(|c| endian.f64_at(data, axis_offset + c * 8)).collect();
        *pos = chebyshev::sum_chebyshev(&coeffs, s);
        *vel = chebyshev::chebyshev_derivative(&coeffs, s) / radius;
    }

    Ok(SpkEvaluation { position_km, velocity_km_s })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_summary_shorter_than_spk_layout() {
        let summary = DafSummary { doubles: vec![0.0], integers: vec![1, 2, 3] };
        assert!(segment_from_summary(&summary).is_err());
    }

    #[test]
    fn decodes_segment_fields_in_order() {
        let summary = DafSummary { doubles: vec![-1e9, 1e9], integers: vec![499, 4, 1, 2, 100, 200] };
        let seg = segment_from_summary(&summary).unwrap();
        assert_eq!(seg.target, 499);
        assert_eq!(seg.center, 4);
        assert_eq!(seg.data_type, 2);
        assert_eq!(seg.start_addr, 100);
        assert_eq!(seg.end_addr, 200);
    }

    #[test]
    fn rejects_rsize_not_matching_3n_plus_2() {
        let data = vec![0u8; 64];
        let segment = SpkSegment {
            start_epoch: 0.0,
            end_epoch: 0.0,
            target: 0,
            center: 0,
            frame: 0,
            data_type: 2,
            start_addr: 1,
            end_addr: 8,
        };
        // Fabricate a descriptor with RSIZE=4, which fails (4-2) % 3 == 0.
        let mut buf = data.clone();
        buf[32..40].copy_from_slice(&0.0f64.to_le_bytes());
        buf[40..48].copy_from_slice(&1.0f64.to_le_bytes());
        buf[48..56].copy_from_slice(&4.0f64.to_le_bytes());
        buf[56..64].copy_from_slice(&1.0f64.to_le_bytes());
        let result = evaluate_type2(&buf, &segment, 0.0, Endianness::Little);
        assert!(matches!(result, Err(KernelError::MalformedRecord(_))));
    }
}

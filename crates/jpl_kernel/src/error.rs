//! Error types for DAF/SPK parsing and segment evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Everything that can go wrong loading a kernel or evaluating a segment.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KernelError {
    /// The byte buffer is shorter than a single DAF record.
    Truncated { needed: usize, got: usize },
    /// The file ID word doesn't start with `DAF/`.
    NotADaf(String),
    /// The `LOCFMT` byte order marker isn't `LTL-IEEE` or `BIG-IEEE`.
    UnknownByteOrder(String),
    /// A summary record's layout didn't match what its header promised.
    MalformedSummary(String),
    /// The segment's SPK data type has no evaluator here.
    UnsupportedDataType(i32),
    /// No segment's (target, center) pair matches the request.
    NoSuchSegment { target: i32, center: i32 },
    /// A segment was found, but none of its records covers the epoch.
    EpochOutOfRange { target: i32, center: i32, epoch_tdb_s: f64 },
    /// A Type 2 record's descriptor or coefficient layout is inconsistent.
    MalformedRecord(String),
    /// Wraps `std::io::Error` as a string so `KernelError` stays `Clone + PartialEq`.
    Io(String),
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncated { needed, got } => write!(f, "kernel buffer too short: need {needed} bytes, got {got}"),
            Self::NotADaf(id) => write!(f, "not a DAF file, file ID {id:?}"),
            Self::UnknownByteOrder(marker) => write!(f, "unrecognised byte-order marker {marker:?}"),
            Self::MalformedSummary(msg) => write!(f, "malformed summary record: {msg}"),
            Self::UnsupportedDataType(dt) => write!(f, "SPK data type {dt} has no evaluator"),
            Self::NoSuchSegment { target, center } => write!(f, "no segment for target={target} center={center}"),
            Self::EpochOutOfRange { target, center, epoch_tdb_s } => {
                write!(f, "epoch {epoch_tdb_s}s (TDB) falls outside target={target} center={center}'s coverage")
            }
            Self::MalformedRecord(msg) => write!(f, "malformed Type 2 record: {msg}"),
            Self::Io(msg) => write!(f, "I/O error reading kernel: {msg}"),
        }
    }
}

impl Error for KernelError {}

impl From<std::io::Error> for KernelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

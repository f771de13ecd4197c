//! Errors from Vedic-layer computations (ascendant, classification).

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ascendant/house computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Geographic latitude outside `[-90, 90]`.
    InvalidLatitude(f64),
    /// Geographic longitude outside `[-180, 180]`.
    InvalidLongitude(f64),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(lat) => write!(f, "invalid latitude: {lat}"),
            Self::InvalidLongitude(lon) => write!(f, "invalid longitude: {lon}"),
        }
    }
}

impl Error for VedicError {}

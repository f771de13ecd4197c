//! Sidereal zodiac and ascendant calculations built on top of the
//! time and reference-frame layers.
//!
//! This crate provides:
//! - Ayanamsha computation for the three supported sidereal systems
//! - Mean and true lunar node (Rahu/Ketu) longitude
//! - Ascendant (Lagna) and MC computation
//!
//! Ayanamsha reference values and node/lagna math build on prior Vedic
//! ephemeris work; see this crate's `DESIGN.md` entry for provenance.

pub mod ayanamsha;
pub mod error;
pub mod lagna;
pub mod lunar_nodes;
pub mod util;

pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_deg, ayanamsha_deg_with_model, ayanamsha_mean_deg,
    ayanamsha_mean_deg_with_model, jd_tdb_to_centuries, tdb_seconds_to_centuries,
};
pub use error::VedicError;
pub use lagna::{lagna_and_mc_rad, lagna_longitude_rad, mc_longitude_rad, ramc_rad};
pub use lunar_nodes::{
    LunarNode, NodeMode, lunar_node_deg, mean_ketu_deg, mean_rahu_deg, true_ketu_deg,
    true_rahu_deg,
};
pub use util::{GeoLocation, normalize_360};

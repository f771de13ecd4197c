//! Cache key: `(loc_hash, yyyy_mm, ayanamsa)`.

use panch_vedic::AyanamshaSystem;
use serde::{Deserialize, Serialize};

/// MD5 of `"lat.4f|lon.4f|tz"`, the location/timezone half of a cache key.
pub fn location_hash(lat_deg: f64, lon_deg: f64, tz: &str) -> String {
    let key = format!("{lat_deg:.4}|{lon_deg:.4}|{tz}");
    format!("{:x}", md5::compute(key.as_bytes()))
}

/// Full cache key for one month's record at one location and ayanamsa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub loc_hash: String,
    /// `YYYY-MM`.
    pub yyyy_mm: String,
    pub ayanamsa: AyanamshaSystem,
}

impl CacheKey {
    pub fn new(lat_deg: f64, lon_deg: f64, tz: &str, yyyy_mm: impl Into<String>, ayanamsa: AyanamshaSystem) -> Self {
        Self {
            loc_hash: location_hash(lat_deg, lon_deg, tz),
            yyyy_mm: yyyy_mm.into(),
            ayanamsa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_hash_is_stable_and_32_hex_chars() {
        let h1 = location_hash(19.076, 72.877, "Asia/Kolkata");
        let h2 = location_hash(19.076, 72.877, "Asia/Kolkata");
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 32);
        assert!(h1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn distinct_locations_hash_differently() {
        let a = location_hash(19.076, 72.877, "Asia/Kolkata");
        let b = location_hash(28.6139, 77.209, "Asia/Kolkata");
        assert_ne!(a, b);
    }

    #[test]
    fn rounding_to_four_decimals_collapses_near_duplicates() {
        let a = location_hash(19.07601, 72.877, "Asia/Kolkata");
        let b = location_hash(19.07604, 72.877, "Asia/Kolkata");
        assert_eq!(a, b);
    }

    #[test]
    fn cache_keys_with_different_ayanamsa_are_distinct() {
        let a = CacheKey::new(19.076, 72.877, "Asia/Kolkata", "2024-03", AyanamshaSystem::Lahiri);
        let b = CacheKey::new(19.076, 72.877, "Asia/Kolkata", "2024-03", AyanamshaSystem::Raman);
        assert_ne!(a, b);
    }
}

//! Horizon mode: ascendant flips and Moon pada transitions over an
//! explicit forward-looking span from a local start instant, rather than a
//! full calendar month.

use chrono::{LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use panch_ephemeris::Ayanamsa;
use panch_events::{AscendantFlip, NakshatraChange, ascendant_flips, current_nakshatra_pada, nakshatra_pada_changes};
use panch_time::{Instant, resolve_timezone};
use tracing::instrument;

use crate::error::OrchestratorError;

/// Ascendant flips and Moon pada transitions over a bounded horizon from a
/// local start instant, each stream seeded with the state already in
/// effect at that instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HorizonRecord {
    pub ascendant_flips: Vec<AscendantFlip>,
    pub nakshatra_changes: Vec<NakshatraChange>,
}

fn resolve_local_instant(tz: Tz, s: &str) -> Result<Instant, OrchestratorError> {
    let err = || OrchestratorError::InvalidLocalInstant(s.to_string());

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
        })
        .map_err(|_| err())?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(Instant::from_utc(dt.with_timezone(&Utc))),
        LocalResult::Ambiguous(earliest, _latest) => Ok(Instant::from_utc(earliest.with_timezone(&Utc))),
        LocalResult::None => Err(err()),
    }
}

/// Run the Ascendant Flip and Nakshatra/Pada detectors over
/// `[start_local, start_local + asc_hours]` and
/// `[start_local, start_local + moon_days]` respectively, each seeded with
/// the state already in effect at `start_local`.
#[instrument(skip(lat_deg, lon_deg), fields(tz = tz_name, start = start_local_iso, ayanamsa = ?ayanamsa))]
pub fn compute_horizon(
    lat_deg: f64,
    lon_deg: f64,
    tz_name: &str,
    start_local_iso: &str,
    asc_hours: f64,
    moon_days: f64,
    ayanamsa: Ayanamsa,
) -> Result<HorizonRecord, OrchestratorError> {
    let tz = resolve_timezone(tz_name)?;
    let start = resolve_local_instant(tz, start_local_iso)?;

    let asc_end = start.plus_seconds(asc_hours * 3600.0);
    let mut flips = ascendant_flips(lat_deg, lon_deg, ayanamsa, start, asc_end);
    flips.sort_by_key(|f| f.instant);

    let moon_end = start.plus_seconds(moon_days * 86_400.0);
    let mut nakshatra_changes = Vec::new();
    if let Some((nakshatra, pada)) = current_nakshatra_pada(ayanamsa, start) {
        nakshatra_changes.push(NakshatraChange { instant: start, nakshatra, pada });
    }
    nakshatra_changes.extend(nakshatra_pada_changes(ayanamsa, start, moon_end));
    nakshatra_changes.sort_by_key(|c| c.instant);

    tracing::info!(
        ascendant_flips = flips.len(),
        nakshatra_changes = nakshatra_changes.len(),
        "horizon record assembled"
    );

    Ok(HorizonRecord { ascendant_flips: flips, nakshatra_changes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_seeds_current_pada_at_start() {
        let record = compute_horizon(19.076, 72.877, "Asia/Kolkata", "2024-03-01T00:00:00", 24.0, 2.0, Ayanamsa::Lahiri)
            .unwrap();
        assert!(!record.nakshatra_changes.is_empty());
        let first = &record.nakshatra_changes[0];
        assert!(first.instant.diff_seconds(Instant::from_utc_ymd_hms(2024, 2, 29, 18, 30, 0.0)).abs() < 1.0);
    }

    #[test]
    fn horizon_ascendant_flips_cover_a_day() {
        let record = compute_horizon(19.076, 72.877, "Asia/Kolkata", "2024-03-01T00:00:00", 24.0, 2.0, Ayanamsa::Lahiri)
            .unwrap();
        assert!(record.ascendant_flips.len() >= 10);
    }

    #[test]
    fn unparseable_start_is_rejected() {
        let result = compute_horizon(19.076, 72.877, "Asia/Kolkata", "not-a-date", 24.0, 2.0, Ayanamsa::Lahiri);
        assert!(result.is_err());
    }
}

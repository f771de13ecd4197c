//! The cached shape of one month's (or horizon's) computed events.

use panch_events::{
    CombustionWindow, NakshatraChange, RetrogradeWindow, SignChange, VelocityExtremum,
};
use serde::{Deserialize, Serialize};

/// The Moon's two fast-moving event streams, grouped together since both
/// come off the Moon's ecliptic longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MoonMonthlyRows {
    pub sign_changes: Vec<SignChange>,
    pub nakshatra_changes: Vec<NakshatraChange>,
}

/// Everything the monthly orchestrator produces for one `(location, month,
/// ayanamsa)` triple, already filtered and sorted for the target window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthRecord {
    pub moon_monthly_rows: MoonMonthlyRows,
    pub sun_rows: Vec<SignChange>,
    pub other_ingress_rows: Vec<SignChange>,
    pub station_rows: Vec<RetrogradeWindow>,
    pub combustion_rows: Vec<CombustionWindow>,
    pub velocity_rows: Vec<VelocityExtremum>,
}

impl MonthRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_roundtrips_through_json() {
        let record = MonthRecord::default();
        let json = record.to_json().unwrap();
        let back = MonthRecord::from_json(&json).unwrap();
        assert_eq!(record, back);
    }
}

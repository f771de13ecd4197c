//! Wire-format rendering: local wall-clock formatting at the output
//! boundary. Internally every record stays in absolute UTC instants;
//! timezone only re-enters when a caller wants text to display.
//!
//! The `*Wire` types below mirror the domain records field-for-field,
//! with every `Instant` replaced by a [`format_local`] string, so that
//! `serde_json::to_string` on a `Wire` type emits exactly the
//! `YYYY-MM-DD HH:MM:SS` local wall-clock the external interface
//! promises, rather than `Instant`'s own RFC 3339 UTC serialization.

use chrono_tz::Tz;
use serde::Serialize;

use panch_cache::{MonthRecord, MoonMonthlyRows};
use panch_ephemeris::Body;
use panch_events::{
    AscendantFlip, CombustionWindow, NakshatraChange, RetrogradeWindow, SignChange, VelocityExtremum,
};
use panch_scanner::ExtremumKind;
use panch_time::Instant;

use crate::horizon::HorizonRecord;

/// Format `instant` as `YYYY-MM-DD HH:MM:SS` local wall-clock in `tz`.
pub fn format_local(instant: Instant, tz: Tz) -> String {
    instant.as_datetime().with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct SignChangeWire {
    pub body: Body,
    pub instant: String,
    pub from_sign: u8,
    pub to_sign: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct NakshatraChangeWire {
    pub instant: String,
    pub nakshatra: u8,
    pub pada: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RetrogradeWindowWire {
    pub body: Body,
    pub start_instant: String,
    pub end_instant: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombustionWindowWire {
    pub body: Body,
    pub start_instant: String,
    pub end_instant: String,
    pub orb_degrees: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VelocityExtremumWire {
    pub body: Body,
    pub instant: String,
    pub signed_speed_deg_per_day: f64,
    pub kind: ExtremumKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct AscendantFlipWire {
    pub instant: String,
    pub from_sign: u8,
    pub to_sign: u8,
    pub midpoint_instant: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoonMonthlyRowsWire {
    pub sign_changes: Vec<SignChangeWire>,
    pub nakshatra_changes: Vec<NakshatraChangeWire>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRecordWire {
    pub moon_monthly_rows: MoonMonthlyRowsWire,
    pub sun_rows: Vec<SignChangeWire>,
    pub other_ingress_rows: Vec<SignChangeWire>,
    pub station_rows: Vec<RetrogradeWindowWire>,
    pub combustion_rows: Vec<CombustionWindowWire>,
    pub velocity_rows: Vec<VelocityExtremumWire>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HorizonRecordWire {
    pub ascendant_flips: Vec<AscendantFlipWire>,
    pub nakshatra_changes: Vec<NakshatraChangeWire>,
}

fn sign_change_wire(e: &SignChange, tz: Tz) -> SignChangeWire {
    SignChangeWire {
        body: e.body,
        instant: format_local(e.instant, tz),
        from_sign: e.from_sign,
        to_sign: e.to_sign,
    }
}

fn nakshatra_change_wire(e: &NakshatraChange, tz: Tz) -> NakshatraChangeWire {
    NakshatraChangeWire { instant: format_local(e.instant, tz), nakshatra: e.nakshatra, pada: e.pada }
}

fn retrograde_window_wire(w: &RetrogradeWindow, tz: Tz) -> RetrogradeWindowWire {
    RetrogradeWindowWire {
        body: w.body,
        start_instant: format_local(w.start_instant, tz),
        end_instant: format_local(w.end_instant, tz),
    }
}

fn combustion_window_wire(w: &CombustionWindow, tz: Tz) -> CombustionWindowWire {
    CombustionWindowWire {
        body: w.body,
        start_instant: format_local(w.start_instant, tz),
        end_instant: format_local(w.end_instant, tz),
        orb_degrees: w.orb_degrees,
    }
}

fn velocity_extremum_wire(e: &VelocityExtremum, tz: Tz) -> VelocityExtremumWire {
    VelocityExtremumWire {
        body: e.body,
        instant: format_local(e.instant, tz),
        signed_speed_deg_per_day: e.signed_speed_deg_per_day,
        kind: e.kind,
    }
}

fn ascendant_flip_wire(e: &AscendantFlip, tz: Tz) -> AscendantFlipWire {
    AscendantFlipWire {
        instant: format_local(e.instant, tz),
        from_sign: e.from_sign,
        to_sign: e.to_sign,
        midpoint_instant: e.midpoint_instant.map(|i| format_local(i, tz)),
    }
}

/// Render a [`MonthRecord`] for the wire: every instant becomes a
/// `YYYY-MM-DD HH:MM:SS` string local to `tz`.
pub fn render_month_record(record: &MonthRecord, tz: Tz) -> MonthRecordWire {
    let MoonMonthlyRows { sign_changes, nakshatra_changes } = &record.moon_monthly_rows;
    MonthRecordWire {
        moon_monthly_rows: MoonMonthlyRowsWire {
            sign_changes: sign_changes.iter().map(|e| sign_change_wire(e, tz)).collect(),
            nakshatra_changes: nakshatra_changes.iter().map(|e| nakshatra_change_wire(e, tz)).collect(),
        },
        sun_rows: record.sun_rows.iter().map(|e| sign_change_wire(e, tz)).collect(),
        other_ingress_rows: record.other_ingress_rows.iter().map(|e| sign_change_wire(e, tz)).collect(),
        station_rows: record.station_rows.iter().map(|w| retrograde_window_wire(w, tz)).collect(),
        combustion_rows: record.combustion_rows.iter().map(|w| combustion_window_wire(w, tz)).collect(),
        velocity_rows: record.velocity_rows.iter().map(|e| velocity_extremum_wire(e, tz)).collect(),
    }
}

/// Render a [`HorizonRecord`] for the wire, as [`render_month_record`] does.
pub fn render_horizon_record(record: &HorizonRecord, tz: Tz) -> HorizonRecordWire {
    HorizonRecordWire {
        ascendant_flips: record.ascendant_flips.iter().map(|e| ascendant_flip_wire(e, tz)).collect(),
        nakshatra_changes: record.nakshatra_changes.iter().map(|e| nakshatra_change_wire(e, tz)).collect(),
    }
}

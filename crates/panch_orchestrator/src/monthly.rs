//! Monthly Orchestrator: composes every detector over a padded scan window,
//! then filters and sorts back down to exactly the requested civil month.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use panch_cache::{MonthRecord, MoonMonthlyRows};
use panch_ephemeris::{Ayanamsa, Body};
use panch_events::{
    NakshatraChange, combustion_windows, current_nakshatra_pada, nakshatra_pada_changes,
    retrograde_windows, sign_ingresses, stations, velocity_extrema,
};
use panch_time::{Instant, month_bounds_utc, resolve_timezone};
use tracing::instrument;

use crate::error::OrchestratorError;
use crate::window::padded_window;

/// Bodies whose sign ingresses land in `other_ingress_rows` (everything
/// except the Sun and Moon, which get their own dedicated rows).
const OTHER_INGRESS_BODIES: [Body; 10] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Rahu,
    Body::Ketu,
];

fn parse_month_start(s: &str) -> Result<(i32, u32), OrchestratorError> {
    let err = || OrchestratorError::InvalidMonthStart(s.to_string());

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok((dt.year(), dt.month()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok((date.year(), date.month()));
    }
    let with_day = format!("{s}-01");
    if let Ok(date) = NaiveDate::parse_from_str(&with_day, "%Y-%m-%d") {
        return Ok((date.year(), date.month()));
    }
    Err(err())
}

/// Run every detector over `[lat, lon]`'s sky for the calendar month
/// containing `month_start_iso` (as observed in `tz`), returning a record
/// whose point events all fall in `[month_start_local, month_end_local)`
/// and whose interval events all intersect it.
#[instrument(skip(lat_deg, lon_deg), fields(tz = tz_name, month = month_start_iso, ayanamsa = ?ayanamsa))]
pub fn compute_monthly(
    lat_deg: f64,
    lon_deg: f64,
    tz_name: &str,
    month_start_iso: &str,
    ayanamsa: Ayanamsa,
) -> Result<MonthRecord, OrchestratorError> {
    let (year, month) = parse_month_start(month_start_iso)?;
    let tz = resolve_timezone(tz_name)?;
    let (month_start, month_end) = month_bounds_utc(year, month, tz)?;
    let (window_start, window_end) = padded_window(month_start, month_end);
    tracing::debug!(lat_deg, lon_deg, "scanning padded window for monthly events");

    let keep_point = |instant: Instant| {
        instant.diff_seconds(month_start) >= 0.0 && instant.diff_seconds(month_end) < 0.0
    };
    let keep_interval = |start: Instant, end: Instant| {
        start.diff_seconds(month_end) < 0.0 && end.diff_seconds(month_start) > 0.0
    };

    let mut sign_changes: Vec<_> = sign_ingresses(Body::Moon, ayanamsa, window_start, window_end)
        .into_iter()
        .filter(|e| keep_point(e.instant))
        .collect();
    sign_changes.sort_by_key(|e| e.instant);

    let mut nakshatra_changes: Vec<_> = nakshatra_pada_changes(ayanamsa, window_start, window_end)
        .into_iter()
        .filter(|e| keep_point(e.instant))
        .collect();
    if nakshatra_changes.is_empty() {
        if let Some((nakshatra, pada)) = current_nakshatra_pada(ayanamsa, month_start) {
            nakshatra_changes.push(NakshatraChange { instant: month_start, nakshatra, pada });
        }
    }
    nakshatra_changes.sort_by_key(|e| e.instant);

    let mut sun_rows: Vec<_> = sign_ingresses(Body::Sun, ayanamsa, window_start, window_end)
        .into_iter()
        .filter(|e| keep_point(e.instant))
        .collect();
    sun_rows.sort_by_key(|e| e.instant);

    let mut other_ingress_rows: Vec<_> = OTHER_INGRESS_BODIES
        .iter()
        .flat_map(|&body| sign_ingresses(body, ayanamsa, window_start, window_end))
        .filter(|e| keep_point(e.instant))
        .collect();
    other_ingress_rows.sort_by_key(|e| e.instant);

    let mut station_rows: Vec<_> = Body::all()
        .iter()
        .flat_map(|&body| {
            let body_stations = stations(body, ayanamsa, window_start, window_end);
            retrograde_windows(body, &body_stations, window_start, window_end)
        })
        .filter(|w| keep_interval(w.start_instant, w.end_instant))
        .collect();
    station_rows.sort_by_key(|w| w.start_instant);

    let mut combustion_rows: Vec<_> = Body::all()
        .iter()
        .flat_map(|&body| combustion_windows(body, ayanamsa, window_start, window_end))
        .filter(|w| keep_interval(w.start_instant, w.end_instant))
        .collect();
    combustion_rows.sort_by_key(|w| w.start_instant);

    let mut velocity_rows: Vec<_> = Body::all()
        .iter()
        .flat_map(|&body| velocity_extrema(body, ayanamsa, window_start, window_end))
        .filter(|e| keep_point(e.instant))
        .collect();
    velocity_rows.sort_by_key(|e| e.instant);

    tracing::info!(
        sign_changes = sign_changes.len(),
        nakshatra_changes = nakshatra_changes.len(),
        stations = station_rows.len(),
        combustion_windows = combustion_rows.len(),
        velocity_extrema = velocity_rows.len(),
        "monthly record assembled"
    );

    Ok(MonthRecord {
        moon_monthly_rows: MoonMonthlyRows { sign_changes, nakshatra_changes },
        sun_rows,
        other_ingress_rows,
        station_rows,
        combustion_rows,
        velocity_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_2024_mumbai_lahiri_produces_a_populated_record() {
        let record = compute_monthly(19.076, 72.877, "Asia/Kolkata", "2024-03-01", Ayanamsa::Lahiri).unwrap();
        assert!(!record.moon_monthly_rows.sign_changes.is_empty());
        assert!(!record.moon_monthly_rows.nakshatra_changes.is_empty());
        assert!(!record.velocity_rows.is_empty());
    }

    #[test]
    fn month_start_accepts_bare_year_month() {
        let record = compute_monthly(19.076, 72.877, "Asia/Kolkata", "2024-03", Ayanamsa::Lahiri).unwrap();
        assert!(!record.moon_monthly_rows.sign_changes.is_empty());
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let result = compute_monthly(19.076, 72.877, "Not/AZone", "2024-03-01", Ayanamsa::Lahiri);
        assert!(result.is_err());
    }

    #[test]
    fn all_point_events_fall_within_the_month() {
        let tz = resolve_timezone("Asia/Kolkata").unwrap();
        let (month_start, month_end) = month_bounds_utc(2024, 3, tz).unwrap();
        let record = compute_monthly(19.076, 72.877, "Asia/Kolkata", "2024-03-01", Ayanamsa::Lahiri).unwrap();
        for e in &record.moon_monthly_rows.sign_changes {
            assert!(e.instant.diff_seconds(month_start) >= 0.0);
            assert!(e.instant.diff_seconds(month_end) < 0.0);
        }
        for e in &record.sun_rows {
            assert!(e.instant.diff_seconds(month_start) >= 0.0);
            assert!(e.instant.diff_seconds(month_end) < 0.0);
        }
    }

    #[test]
    fn interval_events_intersect_the_month() {
        let tz = resolve_timezone("Asia/Kolkata").unwrap();
        let (month_start, month_end) = month_bounds_utc(2024, 3, tz).unwrap();
        let record = compute_monthly(19.076, 72.877, "Asia/Kolkata", "2024-03-01", Ayanamsa::Lahiri).unwrap();
        for w in &record.combustion_rows {
            assert!(w.start_instant.diff_seconds(month_end) < 0.0);
            assert!(w.end_instant.diff_seconds(month_start) > 0.0);
        }
    }
}

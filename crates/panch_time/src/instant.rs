//! A UTC instant and the civil-calendar arithmetic built on top of it.
//!
//! Everything upstream of the ephemeris adapter thinks in UTC instants;
//! timezones only matter at the edges, where a caller asks "give me the
//! month of March 2024 in Asia/Kolkata" and we have to turn that into a
//! `[start, end)` UTC window.

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};
use chrono::{DateTime, Datelike, LocalResult, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A point in time, stored internally as a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Wrap an existing UTC `DateTime`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Construct from calendar fields, all in UTC.
    pub fn from_utc_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: f64) -> Self {
        let whole_sec = sec.floor() as u32;
        let nanos = ((sec - sec.floor()) * 1e9).round() as u32;
        let dt = Utc
            .with_ymd_and_hms(year, month, day, hour, min, whole_sec)
            .single()
            .expect("valid calendar date")
            .with_nanosecond(nanos)
            .expect("nanos in range");
        Self(dt)
    }

    /// Parse an RFC 3339 / ISO-8601 timestamp.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| TimeError::InstantParse(format!("{s}: {e}")))
    }

    /// Format as RFC 3339 with second precision and a trailing `Z`.
    pub fn to_rfc3339(self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    /// The wrapped `DateTime<Utc>`.
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Julian Date (UT), treating UTC as UT1 for sidereal-time purposes.
    pub fn jd(self) -> f64 {
        let day_frac = self.0.day() as f64
            + self.0.hour() as f64 / 24.0
            + self.0.minute() as f64 / 1440.0
            + (self.0.second() as f64 + self.0.nanosecond() as f64 / 1e9) / 86_400.0;
        calendar_to_jd(self.0.year(), self.0.month(), day_frac)
    }

    /// Build an `Instant` from a Julian Date (UT).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let rem = day_frac - day_frac.floor();
        let total_secs = rem * 86_400.0;
        let hour = (total_secs / 3600.0).floor() as u32;
        let min = ((total_secs - hour as f64 * 3600.0) / 60.0).floor() as u32;
        let sec = total_secs - hour as f64 * 3600.0 - min as f64 * 60.0;
        Self::from_utc_ymd_hms(year, month, day.max(1), hour, min, sec)
    }

    /// Add (or subtract) a number of whole seconds.
    pub fn plus_seconds(self, secs: f64) -> Self {
        Self(self.0 + chrono::Duration::milliseconds((secs * 1000.0).round() as i64))
    }

    /// Signed difference in seconds, `self - other`.
    pub fn diff_seconds(self, other: Self) -> f64 {
        (self.0 - other.0).num_milliseconds() as f64 / 1000.0
    }
}

/// Resolve an IANA timezone name.
pub fn resolve_timezone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// Resolve the `[start, end)` UTC window covering calendar month `year-month`
/// as observed in timezone `tz`.
///
/// Local midnight on the 1st of the month may be ambiguous (DST fold) or
/// nonexistent (DST spring-forward gap); both cases are resolved by taking
/// the earliest valid UTC instant, which keeps month boundaries monotonic
/// and never double-counts an event across adjacent months.
pub fn month_bounds_utc(year: i32, month: u32, tz: Tz) -> Result<(Instant, Instant), TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth(format!("{year}-{month:02}")));
    }
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

    let start = resolve_local_midnight(year, month, 1, tz)?;
    let end = resolve_local_midnight(next_year, next_month, 1, tz)?;
    Ok((start, end))
}

fn resolve_local_midnight(year: i32, month: u32, day: u32, tz: Tz) -> Result<Instant, TimeError> {
    let local = match tz.with_ymd_and_hms(year, month, day, 0, 0, 0) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _latest) => earliest,
        LocalResult::None => {
            // Spring-forward gap: walk forward in one-minute steps until a
            // valid local time exists (bounded, since gaps are at most a
            // couple of hours).
            let mut probe_min = 0i64;
            loop {
                probe_min += 1;
                if probe_min > 180 {
                    return Err(TimeError::InvalidMonth(format!(
                        "{year}-{month:02}-{day:02} has no valid local midnight in {tz}"
                    )));
                }
                if let LocalResult::Single(dt) = tz.with_ymd_and_hms(year, month, day, 0, 0, 0) {
                    break dt;
                }
                let probe = chrono::NaiveDate::from_ymd_opt(year, month, day)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    + chrono::Duration::minutes(probe_min);
                if let LocalResult::Single(dt) = tz.from_local_datetime(&probe) {
                    break dt;
                }
            }
        }
    };
    Ok(Instant::from_utc(local.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_roundtrip() {
        let i = Instant::from_utc_ymd_hms(2024, 3, 15, 6, 30, 0.0);
        let jd = i.jd();
        let i2 = Instant::from_jd(jd);
        assert!((i.diff_seconds(i2)).abs() < 1.0);
    }

    #[test]
    fn parse_and_format_rfc3339() {
        let i = Instant::parse("2024-03-15T06:30:00Z").unwrap();
        assert_eq!(i.to_rfc3339(), "2024-03-15T06:30:00Z");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Instant::parse("not-a-date").is_err());
    }

    #[test]
    fn month_bounds_mumbai_is_fixed_offset() {
        let tz = resolve_timezone("Asia/Kolkata").unwrap();
        let (start, end) = month_bounds_utc(2024, 3, tz).unwrap();
        // IST is UTC+5:30 year-round, so midnight IST = 18:30 UTC prior day.
        assert_eq!(start.to_rfc3339(), "2024-02-29T18:30:00Z");
        assert_eq!(end.to_rfc3339(), "2024-03-31T18:30:00Z");
    }

    #[test]
    fn month_bounds_new_york_crosses_dst() {
        let tz = resolve_timezone("America/New_York").unwrap();
        let (start, _end) = month_bounds_utc(2024, 3, tz).unwrap();
        // EST is UTC-5 before the mid-March DST transition.
        assert_eq!(start.to_rfc3339(), "2024-03-01T05:00:00Z");
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert!(resolve_timezone("Not/AZone").is_err());
    }

    #[test]
    fn invalid_month_is_rejected() {
        let tz = resolve_timezone("UTC").unwrap();
        assert!(month_bounds_utc(2024, 13, tz).is_err());
    }
}

//! Julian Date <-> Gregorian calendar conversions.
//!
//! Algorithms follow Meeus, "Astronomical Algorithms" (2nd ed.), chapter 7,
//! valid for any date after the 1582-Oct-15 Gregorian calendar reform.

/// J2000.0 epoch as a Julian Date (2000-Jan-01 12:00:00 TDB).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gregorian calendar date (`day` may carry a fractional part, e.g. `1.5`
/// for noon on the 1st) to Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    // Meeus shifts Jan/Feb into the preceding "year" so the leap-day
    // correction term below only ever has to deal with full years.
    let (shifted_year, shifted_month) = if month <= 2 { (year - 1, month + 12) } else { (year, month) };

    let century = shifted_year / 100;
    let leap_correction = 2 - century + century / 4;

    let whole_days = (365.25 * (shifted_year as f64 + 4716.0)).floor();
    let month_days = (30.6001 * (shifted_month as f64 + 1.0)).floor();

    whole_days + month_days + day + leap_correction as f64 - 1524.5
}

/// Julian Date to Gregorian calendar date, returned as `(year, month, day)`
/// with `day` fractional.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let integer_part = shifted.floor() as i64;
    let day_fraction = shifted - integer_part as f64;

    let a = if integer_part < 2_299_161 {
        integer_part
    } else {
        let century_guess = ((integer_part as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        integer_part + 1 + century_guess - century_guess / 4
    };

    let b = a + 1524;
    let year_guess = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let days_in_year_guess = (365.25 * year_guess as f64).floor() as i64;
    let month_guess = ((b - days_in_year_guess) as f64 / 30.6001).floor() as i64;

    let day = (b - days_in_year_guess) as f64 - (30.6001 * month_guess as f64).floor() + day_fraction;
    let month = if month_guess < 14 { month_guess - 1 } else { month_guess - 13 };
    let year = if month > 2 { year_guess - 4716 } else { year_guess - 4715 };

    (year as i32, month as u32, day)
}

/// Julian Date (TDB) to TDB seconds past J2000.0.
#[inline]
pub fn jd_to_tdb_seconds(jd: f64) -> f64 {
    (jd - J2000_JD) * SECONDS_PER_DAY
}

/// TDB seconds past J2000.0 to Julian Date (TDB).
#[inline]
pub fn tdb_seconds_to_jd(tdb_s: f64) -> f64 {
    J2000_JD + tdb_s / SECONDS_PER_DAY
}

//! Scan-window padding around a requested civil month or horizon.

use panch_time::Instant;

/// Days padded onto each side of a target month so that station and
/// combustion windows straddling the boundary are still correctly bounded
/// by the time they're filtered back down to the month.
pub const PADDING_DAYS: f64 = 45.0;

pub fn padded_window(month_start: Instant, month_end: Instant) -> (Instant, Instant) {
    let pad_seconds = PADDING_DAYS * 86_400.0;
    (month_start.plus_seconds(-pad_seconds), month_end.plus_seconds(pad_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_symmetric() {
        let start = Instant::from_utc_ymd_hms(2024, 3, 1, 0, 0, 0.0);
        let end = Instant::from_utc_ymd_hms(2024, 4, 1, 0, 0, 0.0);
        let (window_start, window_end) = padded_window(start, end);
        assert!((start.diff_seconds(window_start) - PADDING_DAYS * 86_400.0).abs() < 1e-6);
        assert!((window_end.diff_seconds(end) - PADDING_DAYS * 86_400.0).abs() < 1e-6);
    }
}

//! Raw longitude sampling at caller-supplied instants, with none of the
//! event-detection machinery — a thin read path for charting UIs.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use panch_ephemeris::{Ayanamsa, Body, longitude};
use panch_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudeSample {
    pub time: i64,
    pub longitude: f64,
}

/// Sidereal (or tropical) longitude of `body` at each Unix timestamp in
/// `unix_timestamps`, in input order. A timestamp the ephemeris can't
/// resolve yields `f64::NAN`, never a dropped row.
pub fn compute_planetary_timeseries(
    body: Body,
    ayanamsa: Ayanamsa,
    unix_timestamps: &[i64],
) -> Vec<LongitudeSample> {
    unix_timestamps
        .iter()
        .map(|&ts| {
            let instant = Utc
                .timestamp_opt(ts, 0)
                .single()
                .map(Instant::from_utc)
                .unwrap_or_else(|| Instant::from_utc_ymd_hms(1970, 1, 1, 0, 0, 0.0));
            LongitudeSample { time: ts, longitude: longitude(body, instant, ayanamsa) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_preserve_input_order_and_count() {
        let timestamps = [1_700_000_000_i64, 1_700_086_400, 1_700_172_800];
        let samples = compute_planetary_timeseries(Body::Sun, Ayanamsa::Lahiri, &timestamps);
        assert_eq!(samples.len(), timestamps.len());
        for (sample, &ts) in samples.iter().zip(timestamps.iter()) {
            assert_eq!(sample.time, ts);
            assert!((0.0..360.0).contains(&sample.longitude));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let samples = compute_planetary_timeseries(Body::Moon, Ayanamsa::Raman, &[]);
        assert!(samples.is_empty());
    }
}

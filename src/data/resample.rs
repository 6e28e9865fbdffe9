//! Calendar-period resampling
//!
//! Reduces an irregular daily series to one observation per calendar period,
//! keeping the last price observed in each period. Supports quarter,
//! half-year and business-year buckets.

use chrono::{Datelike, NaiveDate};

use crate::types::{PricePoint, PriceSeries};

/// Calendar bucket width for resampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResamplePeriod {
    /// Three calendar months (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec)
    Quarter,
    /// Six calendar months (Jan-Jun, Jul-Dec)
    HalfYear,
    /// One calendar year, closed on the last trading day observed
    BusinessYear,
}

impl ResamplePeriod {
    /// Bucket key for a date; points sharing a key fall in the same period
    fn bucket_of(&self, date: NaiveDate) -> (i32, u32) {
        match self {
            ResamplePeriod::Quarter => (date.year(), (date.month() - 1) / 3),
            ResamplePeriod::HalfYear => (date.year(), (date.month() - 1) / 6),
            ResamplePeriod::BusinessYear => (date.year(), 0),
        }
    }
}

/// Resample a daily series into non-overlapping calendar buckets, keeping the
/// last observation of each bucket.
///
/// Input must be chronologically ordered; output is one point per bucket, in
/// chronological order. An empty input yields an empty output.
pub fn resample_last(series: &[PricePoint], period: ResamplePeriod) -> PriceSeries {
    let mut out: Vec<PricePoint> = Vec::new();
    let mut current: Option<((i32, u32), PricePoint)> = None;

    for point in series {
        let key = period.bucket_of(point.date);

        match current {
            Some((bucket, _)) if bucket == key => {
                // Same bucket, newer observation wins
                current = Some((key, *point));
            }
            Some((_, last)) => {
                out.push(last);
                current = Some((key, *point));
            }
            None => {
                current = Some((key, *point));
            }
        }
    }

    if let Some((_, last)) = current {
        out.push(last);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(y: i32, m: u32, d: u32, price: f64) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), price)
    }

    #[test]
    fn test_resample_empty() {
        assert!(resample_last(&[], ResamplePeriod::Quarter).is_empty());
    }

    #[test]
    fn test_resample_quarterly() {
        let series = vec![
            point(2024, 1, 15, 100.0),
            point(2024, 2, 20, 101.0),
            point(2024, 3, 29, 102.0), // last of Q1
            point(2024, 4, 1, 103.0),
            point(2024, 6, 28, 104.0), // last of Q2
            point(2024, 7, 1, 105.0),  // only point of Q3
        ];

        let resampled = resample_last(&series, ResamplePeriod::Quarter);

        assert_eq!(resampled.len(), 3);
        assert_eq!(resampled[0].adj_close, 102.0);
        assert_eq!(resampled[1].adj_close, 104.0);
        assert_eq!(resampled[2].adj_close, 105.0);
    }

    #[test]
    fn test_resample_half_year() {
        let series = vec![
            point(2024, 1, 2, 100.0),
            point(2024, 6, 28, 110.0), // last of H1
            point(2024, 7, 1, 111.0),
            point(2024, 12, 31, 120.0), // last of H2
        ];

        let resampled = resample_last(&series, ResamplePeriod::HalfYear);

        assert_eq!(resampled.len(), 2);
        assert_eq!(resampled[0].adj_close, 110.0);
        assert_eq!(resampled[1].adj_close, 120.0);
    }

    #[test]
    fn test_resample_business_year_matches_manual_selection() {
        // Last trading day per calendar year, picked by hand
        let series = vec![
            point(2022, 1, 3, 50.0),
            point(2022, 12, 30, 55.0),
            point(2023, 1, 2, 56.0),
            point(2023, 12, 29, 60.0),
            point(2024, 1, 2, 61.0),
            point(2024, 11, 14, 70.0),
        ];

        let resampled = resample_last(&series, ResamplePeriod::BusinessYear);

        assert_eq!(resampled.len(), 3);
        assert_eq!(resampled[0], point(2022, 12, 30, 55.0));
        assert_eq!(resampled[1], point(2023, 12, 29, 60.0));
        assert_eq!(resampled[2], point(2024, 11, 14, 70.0));
    }

    #[test]
    fn test_resample_preserves_chronological_order() {
        let series: Vec<PricePoint> = (1..=12)
            .map(|m| point(2024, m, 10, m as f64))
            .collect();

        let resampled = resample_last(&series, ResamplePeriod::Quarter);

        assert_eq!(resampled.len(), 4);
        assert!(resampled.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_resample_gap_year() {
        // No observations at all in 2023; buckets are formed only from data
        let series = vec![point(2022, 12, 30, 55.0), point(2024, 1, 5, 61.0)];

        let resampled = resample_last(&series, ResamplePeriod::BusinessYear);

        assert_eq!(resampled.len(), 2);
    }
}

//! Core types and constants

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Symbol identifier for equities
pub type Symbol = String;

/// Price type (using f64 for precision)
pub type Price = f64;

/// A single daily observation: trading date plus dividend/split adjusted close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub adj_close: Price,
}

impl PricePoint {
    /// Create a new price point
    pub fn new(date: NaiveDate, adj_close: Price) -> Self {
        Self { date, adj_close }
    }
}

/// Ordered sequence of daily observations for one symbol.
///
/// Chronologically ordered with irregular trading-day spacing; treated as
/// immutable once fetched.
pub type PriceSeries = Vec<PricePoint>;

/// Extract the adjusted closes of a series, preserving order
pub fn closes(series: &[PricePoint]) -> Vec<Price> {
    series.iter().map(|p| p.adj_close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_preserves_order() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let series = vec![
            PricePoint::new(d, 100.0),
            PricePoint::new(d.succ_opt().unwrap(), 101.5),
        ];

        assert_eq!(closes(&series), vec![100.0, 101.5]);
    }
}

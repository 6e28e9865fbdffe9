//! Per-symbol feature derivation
//!
//! Turns one symbol's daily price series plus its fundamentals snapshot into
//! a single flat record of trailing returns, momentum, volatility and
//! fundamental fields. The computation is a pure, stateless transform; a
//! symbol with short history still produces a row with the unavailable
//! metrics left blank.

pub mod returns;
pub mod volatility;

use serde::{Deserialize, Serialize};

use crate::data::resample::{resample_last, ResamplePeriod};
use crate::fundamentals::Fundamentals;
use crate::types::{closes, PricePoint, Symbol};

pub use returns::log_return;
pub use volatility::trailing_volatility;

/// Trading days per year, used for the volatility windows
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// One output record per symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub stock: Symbol,
    pub return1y: Option<f64>,
    pub return2y: Option<f64>,
    pub return3y: Option<f64>,
    pub momentum_3m: Option<f64>,
    pub momentum_6m: Option<f64>,
    pub momentum_1y: Option<f64>,
    pub volatility_1y: Option<f64>,
    pub volatility_2y: Option<f64>,
    pub volatility_3y: Option<f64>,
    #[serde(rename = "priceToBook")]
    pub price_to_book: Option<f64>,
    #[serde(rename = "marketCap")]
    pub market_cap: Option<f64>,
    #[serde(rename = "returnOnEquity")]
    pub return_on_equity: Option<f64>,
    #[serde(rename = "earningsGrowth")]
    pub earnings_growth: Option<f64>,
}

/// Build the feature row for one symbol.
///
/// Returns over 1/2/3 years are lag-1/2/3 log-returns of the business-year
/// resample. Momentum is the lag-1 log-return of the quarter, half-year and
/// business-year resamples respectively; both `momentum_1y` and `return1y`
/// are emitted even though they coincide. Volatility is the sample standard
/// deviation of the raw daily closes over trailing windows of one, two and
/// three trading years.
pub fn build_row(symbol: &str, series: &[PricePoint], fundamentals: &Fundamentals) -> FeatureRow {
    let daily = closes(series);
    let quarterly = closes(&resample_last(series, ResamplePeriod::Quarter));
    let half_yearly = closes(&resample_last(series, ResamplePeriod::HalfYear));
    let yearly = closes(&resample_last(series, ResamplePeriod::BusinessYear));

    FeatureRow {
        stock: symbol.to_string(),
        return1y: log_return(&yearly, 1),
        return2y: log_return(&yearly, 2),
        return3y: log_return(&yearly, 3),
        momentum_3m: log_return(&quarterly, 1),
        momentum_6m: log_return(&half_yearly, 1),
        momentum_1y: log_return(&yearly, 1),
        volatility_1y: trailing_volatility(&daily, TRADING_DAYS_PER_YEAR),
        volatility_2y: trailing_volatility(&daily, 2 * TRADING_DAYS_PER_YEAR),
        volatility_3y: trailing_volatility(&daily, 3 * TRADING_DAYS_PER_YEAR),
        price_to_book: fundamentals.price_to_book,
        market_cap: fundamentals.market_cap,
        return_on_equity: fundamentals.return_on_equity,
        earnings_growth: fundamentals.earnings_growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn point(y: i32, m: u32, d: u32, price: f64) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), price)
    }

    #[test]
    fn test_build_row_empty_series_still_produces_row() {
        let fundamentals = Fundamentals {
            market_cap: Some(5.0e9),
            ..Default::default()
        };

        let row = build_row("VESTL.IS", &[], &fundamentals);

        assert_eq!(row.stock, "VESTL.IS");
        assert!(row.return1y.is_none());
        assert!(row.momentum_3m.is_none());
        assert!(row.volatility_3y.is_none());
        // Fundamentals are copied verbatim even without price history
        assert_eq!(row.market_cap, Some(5.0e9));
        assert!(row.price_to_book.is_none());
    }

    #[test]
    fn test_build_row_short_history_blanks_long_lags() {
        // Two calendar years of observations: lag 1 resolves, lags 2/3 do not
        let series = vec![
            point(2023, 3, 1, 100.0),
            point(2023, 12, 29, 110.0),
            point(2024, 6, 3, 115.0),
            point(2024, 12, 30, 121.0),
        ];

        let row = build_row("GARAN.IS", &series, &Fundamentals::default());

        let r1 = row.return1y.unwrap();
        assert_relative_eq!(r1, (121.0f64 / 110.0).ln(), epsilon = 1e-12);
        assert!(row.return2y.is_none());
        assert!(row.return3y.is_none());
    }

    #[test]
    fn test_build_row_yearly_momentum_equals_return1y() {
        let series: Vec<PricePoint> = (0..30i32)
            .map(|i| point(2022 + i / 12, (i % 12 + 1) as u32, 15, 100.0 + i as f64))
            .collect();

        let row = build_row("THYAO.IS", &series, &Fundamentals::default());

        assert_eq!(row.momentum_1y, row.return1y);
    }

    #[test]
    fn test_build_row_momentum_uses_coarser_buckets() {
        let series = vec![
            point(2024, 1, 10, 100.0),
            point(2024, 3, 28, 104.0), // Q1 close
            point(2024, 5, 2, 106.0),
            point(2024, 6, 28, 108.0), // Q2 and H1 close
            point(2024, 9, 30, 112.0), // Q3 close
            point(2024, 12, 31, 120.0),
        ];

        let row = build_row("ARCLK.IS", &series, &Fundamentals::default());

        // Quarterly lag 1: Q4 close vs Q3 close
        assert_relative_eq!(
            row.momentum_3m.unwrap(),
            (120.0f64 / 112.0).ln(),
            epsilon = 1e-12
        );
        // Half-yearly lag 1: H2 close vs H1 close
        assert_relative_eq!(
            row.momentum_6m.unwrap(),
            (120.0f64 / 108.0).ln(),
            epsilon = 1e-12
        );
        // Single business year: no lag-1 yearly return yet
        assert!(row.return1y.is_none());
    }
}

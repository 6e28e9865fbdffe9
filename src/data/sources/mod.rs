//! External market-data provider integrations
//!
//! One provider ships today: Yahoo Finance (free historical prices plus a
//! fundamentals snapshot, no API key). The trait seam keeps the batch job
//! testable against an offline double.

pub mod yahoo;

pub use yahoo::YahooFinanceSource;

use chrono::NaiveDate;

use crate::error::Result;
use crate::fundamentals::Fundamentals;
use crate::types::PriceSeries;

/// Trait for market-data providers
pub trait MarketDataProvider: Send + Sync {
    /// Fetch daily adjusted-close history for one symbol over a date range
    fn fetch_daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl std::future::Future<Output = Result<PriceSeries>> + Send;

    /// Fetch the point-in-time fundamentals snapshot for one symbol
    fn fetch_fundamentals(
        &self,
        symbol: &str,
    ) -> impl std::future::Future<Output = Result<Fundamentals>> + Send;

    /// Get the provider name
    fn name(&self) -> &str;
}

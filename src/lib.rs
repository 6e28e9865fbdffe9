//! # equity-features
//!
//! A batch feature builder for equity screening. Fetches three years of
//! daily adjusted-close prices for a fixed universe, derives trailing
//! log-returns, momentum and volatility over multiple horizons, joins them
//! with point-in-time fundamentals, and writes one flat CSV table.
//!
//! ## Example
//!
//! ```rust
//! use equity_features::prelude::*;
//! use chrono::NaiveDate;
//!
//! let series = vec![
//!     PricePoint::new(NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(), 100.0),
//!     PricePoint::new(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(), 120.0),
//! ];
//!
//! let row = build_row("GARAN.IS", &series, &Fundamentals::default());
//! assert!(row.return1y.is_some());
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod fundamentals;
#[cfg(feature = "fetch")]
pub mod job;
pub mod report;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::config::JobConfig;
    pub use crate::data::resample::{resample_last, ResamplePeriod};
    #[cfg(feature = "fetch")]
    pub use crate::data::sources::{MarketDataProvider, YahooFinanceSource};
    pub use crate::error::{FeatureError, Result};
    pub use crate::features::{build_row, log_return, trailing_volatility, FeatureRow};
    pub use crate::fundamentals::Fundamentals;
    pub use crate::types::{closes, Price, PricePoint, PriceSeries, Symbol};
}

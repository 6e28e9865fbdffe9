//! Point-in-time fundamental metrics
//!
//! A typed record with named optional fields, so a metric the provider does
//! not report is a modeled case rather than a lookup fault.

use serde::{Deserialize, Serialize};

/// Valuation, profitability and growth snapshot for one symbol
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Price divided by book value per share
    pub price_to_book: Option<f64>,
    /// Total market capitalization in the listing currency
    pub market_cap: Option<f64>,
    /// Trailing return on equity, as a fraction
    pub return_on_equity: Option<f64>,
    /// Year-over-year earnings growth, as a fraction
    pub earnings_growth: Option<f64>,
}

impl Fundamentals {
    /// True when the provider reported none of the four metrics
    pub fn is_empty(&self) -> bool {
        self.price_to_book.is_none()
            && self.market_cap.is_none()
            && self.return_on_equity.is_none()
            && self.earnings_growth.is_none()
    }
}

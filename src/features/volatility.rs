//! Trailing price volatility

use statrs::statistics::{Data, Distribution};

use crate::types::Price;

/// Sample standard deviation of the last `window` raw daily prices.
///
/// When the series is shorter than the window the whole series is used, so
/// the longest horizon degrades gracefully on short histories. `None` only
/// for an empty series.
pub fn trailing_volatility(prices: &[Price], window: usize) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let start = prices.len().saturating_sub(window);
    let tail: Vec<f64> = prices[start..].to_vec();

    if tail.len() < 2 {
        // Dispersion of a single observation
        return Some(0.0);
    }

    let data = Data::new(tail);
    Some(data.std_dev().unwrap_or(0.0))
}

//! Log-return calculations over resampled price series

use crate::types::Price;

/// Trailing log-return of the most recent observation against the one `lag`
/// periods before it: `ln(last) - ln(prices[len - 1 - lag])`.
///
/// Returns `None` when the series holds fewer than `lag + 1` points, and for
/// non-positive prices where the logarithm is undefined. A short series is a
/// modeled case, never a fault.
pub fn log_return(prices: &[Price], lag: usize) -> Option<f64> {
    if prices.len() < lag + 1 {
        return None;
    }

    let last = prices[prices.len() - 1];
    let base = prices[prices.len() - 1 - lag];
    let value = last.ln() - base.ln();

    value.is_finite().then_some(value)
}

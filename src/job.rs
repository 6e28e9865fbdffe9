//! The batch job: fetch, derive, join, persist
//!
//! Strictly sequential, one symbol at a time in list order. A failed fetch
//! for one symbol is logged and leaves that symbol's fields blank; it never
//! aborts the run, so the output always carries one row per configured
//! symbol, in input order.

use chrono::{Duration, Utc};
use hashbrown::HashMap;
use log::{info, warn};

use crate::config::JobConfig;
use crate::data::sources::MarketDataProvider;
use crate::error::Result;
use crate::features::{build_row, FeatureRow};
use crate::fundamentals::Fundamentals;
use crate::report;
use crate::types::{PriceSeries, Symbol};

/// Fetch daily history for every configured symbol, in list order.
///
/// Symbols whose fetch fails are logged and mapped to an empty series.
pub async fn fetch_price_data<P: MarketDataProvider>(
    config: &JobConfig,
    provider: &P,
) -> HashMap<Symbol, PriceSeries> {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(config.lookback_days);

    let mut price_data = HashMap::with_capacity(config.symbols.len());

    for symbol in &config.symbols {
        match provider.fetch_daily_history(symbol, start, end).await {
            Ok(series) => {
                info!("{}: {} daily observations", symbol, series.len());
                price_data.insert(symbol.clone(), series);
            }
            Err(e) => {
                warn!("Failed to fetch history for {}: {}", symbol, e);
                price_data.insert(symbol.clone(), PriceSeries::new());
            }
        }
    }

    price_data
}

/// Run the full batch: bulk history fetch, then one fundamentals lookup and
/// one feature row per symbol. Row order follows the configured symbol list.
pub async fn run<P: MarketDataProvider>(config: &JobConfig, provider: &P) -> Vec<FeatureRow> {
    let price_data = fetch_price_data(config, provider).await;

    let mut rows = Vec::with_capacity(config.symbols.len());

    for symbol in &config.symbols {
        info!("{}", symbol);

        let fundamentals = match provider.fetch_fundamentals(symbol).await {
            Ok(fundamentals) => fundamentals,
            Err(e) => {
                warn!("Failed to fetch fundamentals for {}: {}", symbol, e);
                Fundamentals::default()
            }
        };

        let series = price_data.get(symbol).map(Vec::as_slice).unwrap_or(&[]);
        rows.push(build_row(symbol, series, &fundamentals));
    }

    rows
}

/// Run the batch and persist the table to the configured output path
pub async fn run_to_file<P: MarketDataProvider>(config: &JobConfig, provider: &P) -> Result<()> {
    let rows = run(config, provider).await;
    report::write_csv_file(&config.output_path, &rows)?;
    info!(
        "Wrote {} rows to {}",
        rows.len(),
        config.output_path.display()
    );
    Ok(())
}

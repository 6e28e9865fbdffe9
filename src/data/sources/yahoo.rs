//! Yahoo Finance provider integration
//!
//! Free access to historical daily prices with dividend/split adjusted
//! closes, plus a per-symbol fundamentals snapshot. No API key required.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::data::sources::MarketDataProvider;
use crate::error::{FeatureError, Result};
use crate::fundamentals::Fundamentals;
use crate::types::{PricePoint, PriceSeries};

const YAHOO_DOWNLOAD_URL: &str = "https://query1.finance.yahoo.com/v7/finance/download";
const YAHOO_QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const FUNDAMENTALS_MODULES: &str = "price,defaultKeyStatistics,financialData";

/// Yahoo Finance data source
pub struct YahooFinanceSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Adj Close")]
    adj_close: f64,
}

impl YahooFinanceSource {
    /// Create a new Yahoo Finance source
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| FeatureError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeatureError::Http(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FeatureError::Provider(format!(
                "Yahoo Finance returned error: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FeatureError::Http(format!("Failed to read response: {}", e)))
    }

    fn parse_history_csv(csv_text: &str) -> Result<PriceSeries> {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let mut series = Vec::new();

        for result in reader.deserialize() {
            let row: HistoryRow =
                result.map_err(|e| FeatureError::Parse(format!("CSV parse error: {}", e)))?;

            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .map_err(|e| FeatureError::Parse(format!("Date parse error: {}", e)))?;

            series.push(PricePoint::new(date, row.adj_close));
        }

        Ok(series)
    }

    fn parse_fundamentals_json(body: &str) -> Result<Fundamentals> {
        let response: QuoteSummaryResponse = serde_json::from_str(body)
            .map_err(|e| FeatureError::Parse(format!("JSON parse error: {}", e)))?;

        let summary = response.quote_summary;
        if let Some(error) = summary.error {
            if !error.is_null() {
                return Err(FeatureError::Provider(format!(
                    "Yahoo quoteSummary error: {}",
                    error
                )));
            }
        }

        let result = summary
            .result
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| FeatureError::Provider("Empty quoteSummary result".to_string()))?;

        // Every field is optional on the wire; a missing module or key
        // becomes a blank metric, not an error.
        Ok(Fundamentals {
            price_to_book: result
                .default_key_statistics
                .as_ref()
                .and_then(|stats| stats.price_to_book.as_ref())
                .and_then(WrappedValue::value),
            market_cap: result
                .price
                .as_ref()
                .and_then(|price| price.market_cap.as_ref())
                .and_then(WrappedValue::value),
            return_on_equity: result
                .financial_data
                .as_ref()
                .and_then(|fin| fin.return_on_equity.as_ref())
                .and_then(WrappedValue::value),
            earnings_growth: result
                .financial_data
                .as_ref()
                .and_then(|fin| fin.earnings_growth.as_ref())
                .and_then(WrappedValue::value),
        })
    }
}

impl MarketDataProvider for YahooFinanceSource {
    async fn fetch_daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let period1 = start.and_time(chrono::NaiveTime::MIN).and_utc().timestamp();
        let period2 = end.and_time(chrono::NaiveTime::MIN).and_utc().timestamp();

        let url = format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=history",
            YAHOO_DOWNLOAD_URL, symbol, period1, period2
        );

        let text = self.get_text(&url).await?;
        Self::parse_history_csv(&text)
    }

    async fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        let url = format!(
            "{}/{}?modules={}",
            YAHOO_QUOTE_SUMMARY_URL, symbol, FUNDAMENTALS_MODULES
        );

        let text = self.get_text(&url).await?;
        Self::parse_fundamentals_json(&text)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

// Yahoo wraps numeric values in an object carrying the raw number plus a
// formatted string; only the raw number is used.
#[derive(Debug, Deserialize)]
struct WrappedValue {
    #[serde(default)]
    raw: Option<f64>,
}

impl WrappedValue {
    fn value(&self) -> Option<f64> {
        self.raw.filter(|v| v.is_finite())
    }
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    #[serde(default)]
    result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(default)]
    price: Option<PriceModule>,
    #[serde(rename = "defaultKeyStatistics", default)]
    default_key_statistics: Option<KeyStatisticsModule>,
    #[serde(rename = "financialData", default)]
    financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "marketCap", default)]
    market_cap: Option<WrappedValue>,
}

#[derive(Debug, Deserialize)]
struct KeyStatisticsModule {
    #[serde(rename = "priceToBook", default)]
    price_to_book: Option<WrappedValue>,
}

#[derive(Debug, Deserialize)]
struct FinancialDataModule {
    #[serde(rename = "returnOnEquity", default)]
    return_on_equity: Option<WrappedValue>,
    #[serde(rename = "earningsGrowth", default)]
    earnings_growth: Option<WrappedValue>,
}

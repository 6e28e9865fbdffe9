//! Batch entry point: build the feature table for the configured universe
//! and write it to disk.

use equity_features::config::JobConfig;
use equity_features::data::sources::YahooFinanceSource;
use equity_features::job;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = JobConfig::default();
    let source = YahooFinanceSource::new()?;

    job::run_to_file(&config, &source).await?;

    Ok(())
}

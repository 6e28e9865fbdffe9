//! Batch job configuration
//!
//! The universe is a fixed literal list; there are no CLI flags and no
//! environment-driven configuration for the run itself.

use std::path::PathBuf;

use crate::types::Symbol;

/// The Borsa Istanbul universe the job screens
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "TUPRS.IS", "VAKBN.IS", "KRDMD.IS", "DOHOL.IS", "AKBNK.IS", "TKFEN.IS",
    "FROTO.IS", "GARAN.IS", "KOZAA.IS", "HALKB.IS", "TCELL.IS", "KOZAL.IS",
    "VESTL.IS", "YKBNK.IS", "TTKOM.IS", "BIMAS.IS", "PETKM.IS", "ARCLK.IS",
    "EREGL.IS", "SAHOL.IS", "EKGYO.IS", "THYAO.IS", "PGSUS.IS", "ISCTR.IS",
    "KCHOL.IS", "ASELS.IS", "TAVHL.IS", "GUBRF.IS", "SISE.IS", "SASA.IS",
];

/// Calendar days of history requested from the provider (three years)
pub const DEFAULT_LOOKBACK_DAYS: i64 = 3 * 365;

/// Configuration for one batch run
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Symbols to screen, in output order
    pub symbols: Vec<Symbol>,
    /// Calendar days of daily history to request
    pub lookback_days: i64,
    /// Destination of the flat feature table
    pub output_path: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            output_path: PathBuf::from("data.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_universe() {
        let config = JobConfig::default();

        assert_eq!(config.symbols.len(), 30);
        assert_eq!(config.symbols[0], "TUPRS.IS");
        assert!(config.symbols.iter().all(|s| s.ends_with(".IS")));
    }
}

//! End-to-end screening.
//!
//! Data flows one way: the snapshot's records seed the ranking populations,
//! every ticker is then assessed independently (in parallel), and the scored
//! tickers are aggregated into a report. A run is a pure function of the
//! snapshot, the configuration and the caller's timestamp.

use crate::config::ScreenerConfig;
use crate::error::{Result, ScreenError};
use cadiz_data::UniverseSnapshot;
use cadiz_factors::ValueEngine;
use cadiz_output::{ScoredTicker, ScreenerReport};
use rayon::prelude::*;

/// Runs the value screen over a snapshot.
#[derive(Debug, Clone, Default)]
pub struct Screener {
    config: ScreenerConfig,
}

impl Screener {
    /// Create a screener with the given configuration.
    pub const fn new(config: ScreenerConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// Score every ticker in `snapshot` and build the report.
    ///
    /// `last_updated` is copied into the report verbatim. Fails only when
    /// there is nothing to score.
    pub fn screen(
        &self,
        snapshot: &UniverseSnapshot,
        last_updated: impl Into<String>,
    ) -> Result<ScreenerReport> {
        let tickers = match self.config.limit {
            Some(limit) => &snapshot.tickers[..limit.min(snapshot.len())],
            None => snapshot.tickers.as_slice(),
        };
        if tickers.is_empty() {
            return Err(ScreenError::EmptyUniverse);
        }

        tracing::info!(tickers = tickers.len(), "screening universe");

        let engine = ValueEngine::new(
            tickers.iter().map(|t| &t.record),
            self.config.engine_config(),
        );
        let window = self.config.history_window_years;

        let stocks: Vec<ScoredTicker> = tickers
            .par_iter()
            .map(|input| {
                let history = input.pe_history.trailing_years(window);
                let assessment = engine.assess_with_history(input, &history);
                ScoredTicker::new(input, &history, assessment)
            })
            .collect();

        Ok(ScreenerReport::new(
            last_updated,
            stocks,
            &self.config.buckets,
        ))
    }
}

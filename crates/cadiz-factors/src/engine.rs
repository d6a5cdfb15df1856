//! Per-ticker valuation assessment.
//!
//! [`ValueEngine`] holds the immutable universe populations for a run plus
//! the configured signals, and evaluates tickers independently of each other.

use crate::analog::{AnalogConfig, AnalogReturns, AnalogSummary};
use crate::composite::{CompositeConfig, CompositeScorer};
use crate::cross_section::{CrossSectionalRanker, CrossSectionalRanks};
use crate::history_percentile::{HistoryPercentile, HistoryPercentileConfig};
use crate::signal::Signal;
use cadiz_data::{MetricHistory, TickerInput, TickerRecord};
use serde::{Deserialize, Serialize};

/// Everything derived for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAssessment {
    /// Composite score in `[0, 100]`; higher is cheaper.
    pub value_score: u8,
    /// Cross-sectional percentile ranks.
    pub ranks: CrossSectionalRanks,
    /// Percentile of the current P/E within the ticker's own history.
    pub pe_percentile: u8,
    /// Forward returns after similar past valuations.
    pub hist_performance: AnalogSummary,
}

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Composite score settings
    pub composite: CompositeConfig,
    /// Own-history percentile settings
    pub history: HistoryPercentileConfig,
    /// Analog return settings
    pub analog: AnalogConfig,
}

/// Scores tickers against a fixed universe.
#[derive(Debug, Clone)]
pub struct ValueEngine {
    ranker: CrossSectionalRanker,
    composite: CompositeScorer,
    history: HistoryPercentile,
    analog: AnalogReturns,
}

impl ValueEngine {
    /// Build populations from `records` and configure the signals.
    pub fn new<'a, I>(records: I, config: EngineConfig) -> Self
    where
        I: IntoIterator<Item = &'a TickerRecord>,
        I::IntoIter: Clone,
    {
        Self {
            ranker: CrossSectionalRanker::build(records),
            composite: CompositeScorer::with_config(config.composite),
            history: HistoryPercentile::with_config(config.history),
            analog: AnalogReturns::with_config(config.analog),
        }
    }

    /// Populations backing the cross-sectional ranks.
    pub const fn ranker(&self) -> &CrossSectionalRanker {
        &self.ranker
    }

    /// Assess one ticker using its full P/E history.
    pub fn assess(&self, input: &TickerInput) -> ValueAssessment {
        let ranks = self.ranker.ranks(&input.record);
        ValueAssessment {
            value_score: self.composite.score(&ranks, input.record.discount_52w()),
            ranks,
            pe_percentile: self.history.evaluate(input),
            hist_performance: self.analog.evaluate(input),
        }
    }

    /// Assess one ticker against a substitute P/E history, such as a
    /// trailing window of the full one.
    pub fn assess_with_history(
        &self,
        input: &TickerInput,
        pe_history: &MetricHistory,
    ) -> ValueAssessment {
        let record = &input.record;
        let ranks = self.ranker.ranks(record);
        ValueAssessment {
            value_score: self.composite.score(&ranks, record.discount_52w()),
            ranks,
            pe_percentile: self
                .history
                .percentile(record.metrics.trailing_pe, pe_history),
            hist_performance: self
                .analog
                .analyze(record.metrics.trailing_pe, pe_history, &input.prices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(ticker: &str, pe: f64, price: f64, high: f64) -> TickerInput {
        let mut record = TickerRecord::new(ticker);
        record.metrics.trailing_pe = Some(pe);
        record.price = Some(price);
        record.metrics.high_52w = Some(high);
        TickerInput::new(record)
    }

    #[test]
    fn test_assess() {
        let inputs = [
            input("A", 10.0, 70.0, 100.0),
            input("B", 20.0, 100.0, 100.0),
            input("C", 30.0, 100.0, 100.0),
        ];
        let engine = ValueEngine::new(inputs.iter().map(|i| &i.record), EngineConfig::default());

        let a = engine.assess(&inputs[0]);
        assert_eq!(a.ranks.pe, 33);
        assert_eq!(a.ranks.pb, 50);
        assert_eq!(a.pe_percentile, 50);
        assert!(a.hist_performance.is_empty());
        // (67 * 0.30) + 50 * 0.55 + 60 * 0.15 = 56.6
        assert_eq!(a.value_score, 57);

        let c = engine.assess(&inputs[2]);
        assert_eq!(c.ranks.pe, 100);
        // 0 + 27.5 + 0
        assert_eq!(c.value_score, 28);
    }

    #[test]
    fn test_assess_with_history_matches_assess() {
        let inputs = [input("A", 12.0, 90.0, 100.0), input("B", 18.0, 95.0, 100.0)];
        let engine = ValueEngine::new(inputs.iter().map(|i| &i.record), EngineConfig::default());

        let full = engine.assess(&inputs[1]);
        let windowed = engine.assess_with_history(&inputs[1], &inputs[1].pe_history);
        assert_eq!(full, windowed);
    }
}

//! Own-history P/E percentile.
//!
//! Answers "is this stock cheap relative to itself": the current trailing P/E
//! is ranked against the ticker's own P/E history with the same formula used
//! for peer ranking.

use crate::metric::ValuationMetric;
use crate::percentile::{NEUTRAL_PERCENTILE, percentile_rank, sorted_population};
use crate::signal::Signal;
use cadiz_data::{MetricHistory, TickerInput};
use serde::{Deserialize, Serialize};

/// Configuration for the own-history percentile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryPercentileConfig {
    /// Minimum number of valid history points (default: 4)
    pub min_points: usize,
}

impl Default for HistoryPercentileConfig {
    fn default() -> Self {
        Self { min_points: 4 }
    }
}

/// Percentile of the current P/E within the ticker's own history.
#[derive(Debug, Clone, Default)]
pub struct HistoryPercentile {
    config: HistoryPercentileConfig,
}

impl HistoryPercentile {
    /// Percentile of `current_pe` against `history`.
    ///
    /// Only history values with `0 < pe < 500` count. Falls back to
    /// [`NEUTRAL_PERCENTILE`] when fewer than `min_points` remain or the
    /// current P/E is itself absent or implausible.
    pub fn percentile(&self, current_pe: Option<f64>, history: &MetricHistory) -> u8 {
        let metric = ValuationMetric::TrailingPe;
        let Some(current) = current_pe.filter(|&v| metric.is_valid(v)) else {
            return NEUTRAL_PERCENTILE;
        };

        let population = sorted_population(history.values().filter(|&v| metric.is_valid(v)));
        if population.len() < self.config.min_points {
            tracing::debug!(
                points = population.len(),
                required = self.config.min_points,
                "insufficient P/E history"
            );
            return NEUTRAL_PERCENTILE;
        }

        percentile_rank(&population, current).unwrap_or(NEUTRAL_PERCENTILE)
    }
}

impl Signal for HistoryPercentile {
    type Config = HistoryPercentileConfig;
    type Output = u8;

    fn name(&self) -> &'static str {
        "pe_percentile"
    }

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn evaluate(&self, input: &TickerInput) -> u8 {
        self.percentile(input.record.metrics.trailing_pe, &input.pe_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadiz_data::{MetricHistoryPoint, TickerRecord};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn history(values: &[f64]) -> MetricHistory {
        MetricHistory::new(values.iter().enumerate().map(|(i, &v)| {
            let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(91 * i as u64);
            MetricHistoryPoint::new(date, v)
        }))
    }

    #[rstest]
    #[case(12.0, 20)]
    #[case(10.0, 20)]
    #[case(9.0, 0)]
    #[case(25.0, 80)]
    #[case(60.0, 100)]
    fn test_percentile(#[case] current: f64, #[case] expected: u8) {
        let signal = HistoryPercentile::default();
        let h = history(&[10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(signal.percentile(Some(current), &h), expected);
    }

    #[test]
    fn test_insufficient_history_is_neutral() {
        let signal = HistoryPercentile::default();
        let h = history(&[10.0, 15.0, 20.0]);
        assert_eq!(signal.percentile(Some(12.0), &h), NEUTRAL_PERCENTILE);

        // Invalid points don't count toward the minimum.
        let h = history(&[10.0, 15.0, 20.0, 650.0, -3.0]);
        assert_eq!(signal.percentile(Some(12.0), &h), NEUTRAL_PERCENTILE);
    }

    #[test]
    fn test_absent_current_is_neutral() {
        let signal = HistoryPercentile::default();
        let h = history(&[10.0, 15.0, 20.0, 25.0]);
        assert_eq!(signal.percentile(None, &h), NEUTRAL_PERCENTILE);
        assert_eq!(signal.percentile(Some(900.0), &h), NEUTRAL_PERCENTILE);
    }

    #[test]
    fn test_configurable_minimum() {
        let signal = HistoryPercentile::with_config(HistoryPercentileConfig { min_points: 2 });
        let h = history(&[10.0, 20.0]);
        assert_eq!(signal.percentile(Some(15.0), &h), 50);
        assert_eq!(signal.percentile(Some(20.0), &h), 100);
    }

    #[test]
    fn test_evaluate_uses_trailing_pe() {
        let mut record = TickerRecord::new("JNJ");
        record.metrics.trailing_pe = Some(25.0);
        let input = TickerInput::new(record).with_pe_history(history(&[10.0, 15.0, 20.0, 25.0, 30.0]));

        let signal = HistoryPercentile::default();
        assert_eq!(signal.name(), "pe_percentile");
        assert_eq!(signal.evaluate(&input), 80);
    }
}

//! Historical analog returns.
//!
//! Looks back through a ticker's P/E history for dates when it traded near
//! today's multiple, and measures what the share price did over the following
//! horizon. Dates are resolved to real closes through the daily price series.

use crate::metric::ValuationMetric;
use crate::signal::Signal;
use cadiz_data::history::year_month;
use cadiz_data::{MetricHistory, PriceSeries, TickerInput, round_to};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Configuration for analog matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalogConfig {
    /// Half-width of the similarity band as a fraction of current P/E (default: 0.15)
    pub band: f64,
    /// Forward horizon in calendar days (default: 180)
    pub horizon_days: u64,
    /// Maximum distance from a requested date to its trading day (default: 10)
    pub tolerance_days: i64,
    /// Minimum valid P/E history points (default: 4)
    pub min_history_points: usize,
    /// Minimum daily closes (default: 126)
    pub min_price_points: usize,
    /// Representative cases kept in the output (default: 6)
    pub max_cases: usize,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            band: 0.15,
            horizon_days: 180,
            tolerance_days: 10,
            min_history_points: 4,
            min_price_points: 126,
            max_cases: 6,
        }
    }
}

/// A past date whose P/E matched today's, with the realized forward return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalogCase {
    /// Entry date, written as `YYYY-MM`.
    #[serde(with = "year_month")]
    pub date: NaiveDate,
    /// P/E at the entry date, one decimal.
    pub pe: f64,
    /// Price return over the horizon in percent, one decimal.
    #[serde(rename = "return6m")]
    pub return_6m: f64,
}

/// Aggregate outcome of every resolved analog case.
///
/// With no cases, `avg_6m_return` and `win_rate` are `None` rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalogSummary {
    /// Number of resolved cases.
    pub similar_count: usize,
    /// Mean forward return in percent, one decimal.
    #[serde(rename = "avg6mReturn")]
    pub avg_6m_return: Option<f64>,
    /// Share of cases with a positive return, in percent.
    pub win_rate: Option<u8>,
    /// First resolved cases in chronological order.
    pub cases: Vec<AnalogCase>,
}

impl AnalogSummary {
    /// Summary with no cases.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no case was resolved.
    pub const fn is_empty(&self) -> bool {
        self.similar_count == 0
    }

    fn from_cases(cases: Vec<AnalogCase>, max_cases: usize) -> Self {
        if cases.is_empty() {
            return Self::empty();
        }

        let n = cases.len() as f64;
        let mean = cases.iter().map(|c| c.return_6m).sum::<f64>() / n;
        let wins = cases.iter().filter(|c| c.return_6m > 0.0).count() as f64;

        Self {
            similar_count: cases.len(),
            avg_6m_return: Some(round_to(mean, 1)),
            win_rate: Some((wins / n * 100.0).round() as u8),
            cases: cases.into_iter().take(max_cases).collect(),
        }
    }
}

/// Forward returns following similar historical valuations.
#[derive(Debug, Clone, Default)]
pub struct AnalogReturns {
    config: AnalogConfig,
}

impl AnalogReturns {
    /// Find and aggregate analog cases.
    ///
    /// Steps:
    /// 1. Keep history points with `0 < pe < 500` inside `current * (1 ± band)`.
    /// 2. Resolve each point's date, and that date plus the horizon, to the
    ///    nearest trading day within `tolerance_days`; drop it otherwise.
    /// 3. Return = `(exit / entry - 1) * 100`, one decimal.
    ///
    /// Returns an empty summary when the current P/E is absent or implausible,
    /// the history is too short, or the price series is too short.
    pub fn analyze(
        &self,
        current_pe: Option<f64>,
        history: &MetricHistory,
        prices: &PriceSeries,
    ) -> AnalogSummary {
        let metric = ValuationMetric::TrailingPe;
        let Some(current) = current_pe.filter(|&v| metric.is_valid(v)) else {
            return AnalogSummary::empty();
        };

        let valid: Vec<_> = history
            .points()
            .iter()
            .filter(|p| metric.is_valid(p.value))
            .collect();
        if valid.len() < self.config.min_history_points {
            tracing::debug!(points = valid.len(), "insufficient history for analogs");
            return AnalogSummary::empty();
        }
        if prices.len() < self.config.min_price_points {
            tracing::debug!(days = prices.len(), "insufficient prices for analogs");
            return AnalogSummary::empty();
        }

        let lower = current * (1.0 - self.config.band);
        let upper = current * (1.0 + self.config.band);
        let tolerance = self.config.tolerance_days;

        let cases = valid
            .into_iter()
            .filter(|p| p.value >= lower && p.value <= upper)
            .filter_map(|p| {
                let target = p.date.checked_add_days(Days::new(self.config.horizon_days))?;
                let entry = prices.nearest_within(p.date, tolerance);
                let exit = prices.nearest_within(target, tolerance);
                let (Some(entry), Some(exit)) = (entry, exit) else {
                    tracing::debug!(date = %p.date, "unresolvable analog date");
                    return None;
                };
                Some(AnalogCase {
                    date: p.date,
                    pe: round_to(p.value, 1),
                    return_6m: round_to((exit.close / entry.close - 1.0) * 100.0, 1),
                })
            })
            .collect();

        AnalogSummary::from_cases(cases, self.config.max_cases)
    }
}

impl Signal for AnalogReturns {
    type Config = AnalogConfig;
    type Output = AnalogSummary;

    fn name(&self) -> &'static str {
        "hist_performance"
    }

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn evaluate(&self, input: &TickerInput) -> AnalogSummary {
        self.analyze(
            input.record.metrics.trailing_pe,
            &input.pe_history,
            &input.prices,
        )
    }
}

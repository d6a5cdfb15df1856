//! Scored ticker records.

use cadiz_data::history::year_month;
use cadiz_data::{MetricHistory, TickerInput, TickerRecord, ValuationMetrics, round_to};
use cadiz_factors::{AnalogSummary, ValueAssessment};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One P/E history entry as published.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeHistoryEntry {
    /// Observation month, written as `YYYY-MM`.
    #[serde(with = "year_month")]
    pub date: NaiveDate,
    /// P/E, one decimal.
    pub pe: f64,
}

/// A ticker record together with everything derived for it in one run.
///
/// Serializes flat, in the dashboard's camelCase field layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTicker {
    /// Input record with multiples rounded to two decimals.
    #[serde(flatten)]
    pub record: TickerRecord,
    /// Percent distance from the 52-week high, two decimals.
    #[serde(rename = "discount52w")]
    pub discount_52w: Option<f64>,
    /// Composite value score in `[0, 100]`.
    pub value_score: u8,
    /// Cross-sectional P/E percentile.
    pub pe_rank: u8,
    /// Cross-sectional P/B percentile.
    pub pb_rank: u8,
    /// Cross-sectional PEG percentile.
    pub peg_rank: u8,
    /// Cross-sectional P/S percentile.
    pub ps_rank: u8,
    /// Own-history P/E percentile.
    pub pe_percentile: u8,
    /// P/E history the analytics used.
    pub pe_history: Vec<PeHistoryEntry>,
    /// Analog return aggregate.
    pub hist_performance: AnalogSummary,
    /// Input multiples before output rounding; not serialized.
    #[serde(skip)]
    exact_metrics: ValuationMetrics,
}

impl ScoredTicker {
    /// Combine an input with its assessment.
    ///
    /// `pe_history` is the window the analytics ran on.
    pub fn new(input: &TickerInput, pe_history: &MetricHistory, assessment: ValueAssessment) -> Self {
        let mut record = input.record.clone();
        record.metrics = rounded_metrics(&record.metrics);

        Self {
            discount_52w: input.record.discount_52w(),
            value_score: assessment.value_score,
            pe_rank: assessment.ranks.pe,
            pb_rank: assessment.ranks.pb,
            peg_rank: assessment.ranks.peg,
            ps_rank: assessment.ranks.ps,
            pe_percentile: assessment.pe_percentile,
            pe_history: pe_history
                .points()
                .iter()
                .map(|p| PeHistoryEntry {
                    date: p.date,
                    pe: round_to(p.value, 1),
                })
                .collect(),
            hist_performance: assessment.hist_performance,
            exact_metrics: input.record.metrics.clone(),
            record,
        }
    }

    /// Input multiples at full precision, as ranked.
    ///
    /// Empty for tickers read back from serialized output.
    pub const fn exact_metrics(&self) -> &ValuationMetrics {
        &self.exact_metrics
    }

    /// Trailing P/E as published.
    pub const fn pe(&self) -> Option<f64> {
        self.record.metrics.trailing_pe
    }
}

fn rounded_metrics(metrics: &ValuationMetrics) -> ValuationMetrics {
    let r2 = |v: Option<f64>| v.map(|v| round_to(v, 2));
    ValuationMetrics {
        trailing_pe: r2(metrics.trailing_pe),
        forward_pe: r2(metrics.forward_pe),
        price_to_book: r2(metrics.price_to_book),
        price_to_sales: r2(metrics.price_to_sales),
        peg: r2(metrics.peg),
        ev_to_ebitda: r2(metrics.ev_to_ebitda),
        dividend_yield: r2(metrics.dividend_yield),
        return_on_equity: r2(metrics.return_on_equity),
        high_52w: metrics.high_52w,
        low_52w: metrics.low_52w,
    }
}

/// Order by ascending trailing P/E, absent P/E last.
///
/// The sort is stable: ties keep their existing order.
pub fn sort_by_pe(stocks: &mut [ScoredTicker]) {
    stocks.sort_by(|a, b| match (a.pe(), b.pe()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use cadiz_factors::CrossSectionalRanks;

    pub(crate) fn scored(ticker: &str, pe: Option<f64>, score: u8) -> ScoredTicker {
        let mut record = TickerRecord::new(ticker);
        record.metrics.trailing_pe = pe;
        scored_record(record, score)
    }

    pub(crate) fn scored_record(record: TickerRecord, score: u8) -> ScoredTicker {
        let assessment = ValueAssessment {
            value_score: score,
            ranks: CrossSectionalRanks::neutral(),
            pe_percentile: 50,
            hist_performance: AnalogSummary::empty(),
        };
        ScoredTicker::new(&TickerInput::new(record), &MetricHistory::default(), assessment)
    }

    #[test]
    fn test_rounding() {
        let mut record = TickerRecord::new("AAPL");
        record.price = Some(100.0);
        record.metrics.trailing_pe = Some(35.2468);
        record.metrics.peg = Some(2.0049);
        record.metrics.high_52w = Some(133.33);
        let history = MetricHistory::new([cadiz_data::MetricHistoryPoint::new(
            NaiveDate::from_ymd_opt(2023, 9, 30).unwrap(),
            28.4449,
        )]);
        let assessment = ValueAssessment {
            value_score: 61,
            ranks: CrossSectionalRanks { pe: 80, pb: 50, peg: 40, ps: 50 },
            pe_percentile: 75,
            hist_performance: AnalogSummary::empty(),
        };

        let scored = ScoredTicker::new(&TickerInput::new(record), &history, assessment);

        assert_eq!(scored.pe(), Some(35.25));
        assert_eq!(scored.record.metrics.peg, Some(2.0));
        assert_eq!(scored.exact_metrics().trailing_pe, Some(35.2468));
        assert_eq!(scored.exact_metrics().peg, Some(2.0049));
        assert_eq!(scored.discount_52w, Some(-25.0));
        assert_eq!(scored.pe_history[0].pe, 28.4);
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(scored("KO", Some(24.0), 55)).unwrap();
        assert_eq!(json["ticker"], "KO");
        assert_eq!(json["pe"], 24.0);
        assert_eq!(json["valueScore"], 55);
        assert_eq!(json["peRank"], 50);
        assert_eq!(json["pegRank"], 50);
        assert_eq!(json["pePercentile"], 50);
        assert!(json["discount52w"].is_null());
        assert!(json["peHistory"].as_array().unwrap().is_empty());
        assert_eq!(json["histPerformance"]["similarCount"], 0);
        assert!(json["histPerformance"]["avg6mReturn"].is_null());
    }

    #[test]
    fn test_sort_by_pe() {
        let mut stocks = vec![
            scored("A", None, 50),
            scored("B", Some(30.0), 50),
            scored("C", Some(10.0), 50),
            scored("D", None, 50),
            scored("E", Some(10.0), 50),
        ];
        sort_by_pe(&mut stocks);

        let order: Vec<_> = stocks.iter().map(|s| s.record.ticker.as_str()).collect();
        assert_eq!(order, vec!["C", "E", "B", "A", "D"]);
    }
}

//! Sector and universe roll-ups.
//!
//! Averages only include plausible multiples (`0 < P/E < 500`,
//! `0 < P/B < 200`), and a group with no plausible value reports `None`
//! rather than zero.

use crate::scored::ScoredTicker;
use cadiz_data::{GicsSector, round_to};
use cadiz_factors::ValuationMetric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Score cut-offs for the value buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketThresholds {
    /// Scores at or above this are undervalued (default: 65)
    pub undervalued: u8,
    /// Scores at or below this are overvalued (default: 35)
    pub overvalued: u8,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            undervalued: 65,
            overvalued: 35,
        }
    }
}

impl BucketThresholds {
    /// Bucket for a value score.
    pub const fn classify(&self, score: u8) -> ValueBucket {
        if score >= self.undervalued {
            ValueBucket::Undervalued
        } else if score <= self.overvalued {
            ValueBucket::Overvalued
        } else {
            ValueBucket::FairValue
        }
    }
}

/// Value bucket of a scored ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueBucket {
    /// Score at or above the undervalued threshold.
    Undervalued,
    /// Score strictly between the thresholds.
    FairValue,
    /// Score at or below the overvalued threshold.
    Overvalued,
}

impl fmt::Display for ValueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undervalued => "Undervalued",
            Self::FairValue => "Fair value",
            Self::Overvalued => "Overvalued",
        })
    }
}

/// Averages for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    /// Mean plausible P/E, one decimal.
    #[serde(rename = "avgPE")]
    pub avg_pe: Option<f64>,
    /// Mean plausible P/B, one decimal.
    #[serde(rename = "avgPB")]
    pub avg_pb: Option<f64>,
    /// Number of constituents, plausible or not.
    pub count: usize,
}

/// Universe-wide counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    /// Tickers at or above the undervalued threshold.
    pub undervalued: usize,
    /// Tickers at or below the overvalued threshold.
    pub overvalued: usize,
    /// Everything in between.
    pub fair_value: usize,
}

/// Universe-level summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseSummary {
    /// Number of scored tickers.
    pub total_stocks: usize,
    /// Mean plausible P/E, one decimal.
    #[serde(rename = "avgPE")]
    pub avg_pe: Option<f64>,
    /// Bucket counts.
    #[serde(flatten)]
    pub buckets: BucketCounts,
}

impl UniverseSummary {
    /// Summarize scored tickers.
    pub fn from_scored(stocks: &[ScoredTicker], thresholds: &BucketThresholds) -> Self {
        let mut buckets = BucketCounts {
            undervalued: 0,
            overvalued: 0,
            fair_value: 0,
        };
        for stock in stocks {
            match thresholds.classify(stock.value_score) {
                ValueBucket::Undervalued => buckets.undervalued += 1,
                ValueBucket::Overvalued => buckets.overvalued += 1,
                ValueBucket::FairValue => buckets.fair_value += 1,
            }
        }

        Self {
            total_stocks: stocks.len(),
            avg_pe: plausible_mean(stocks.iter(), ValuationMetric::TrailingPe),
            buckets,
        }
    }
}

/// Per-sector averages, keyed by sector.
///
/// Tickers without a recognized sector are left out.
pub fn summarize_sectors(stocks: &[ScoredTicker]) -> BTreeMap<GicsSector, SectorSummary> {
    let mut groups: BTreeMap<GicsSector, Vec<&ScoredTicker>> = BTreeMap::new();
    for stock in stocks {
        if let Some(sector) = stock.record.sector {
            groups.entry(sector).or_default().push(stock);
        }
    }

    groups
        .into_iter()
        .map(|(sector, members)| {
            let summary = SectorSummary {
                avg_pe: plausible_mean(members.iter().copied(), ValuationMetric::TrailingPe),
                avg_pb: plausible_mean(members.iter().copied(), ValuationMetric::PriceToBook),
                count: members.len(),
            };
            (sector, summary)
        })
        .collect()
}

fn plausible_mean<'a>(
    stocks: impl Iterator<Item = &'a ScoredTicker>,
    metric: ValuationMetric,
) -> Option<f64> {
    let (sum, n) = stocks
        .filter_map(|s| metric.metric_value(s.exact_metrics()))
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| round_to(sum / n as f64, 1))
}

/// Format an optional average for terminal display.
pub(crate) fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"))
}

impl fmt::Display for UniverseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stocks, avg P/E {}: {} undervalued, {} fair value, {} overvalued",
            self.total_stocks,
            fmt_opt(self.avg_pe),
            self.buckets.undervalued,
            self.buckets.fair_value,
            self.buckets.overvalued
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scored::tests::{scored, scored_record};
    use cadiz_data::TickerRecord;
    use rstest::rstest;

    fn with_sector(
        ticker: &str,
        sector: Option<GicsSector>,
        pe: Option<f64>,
        pb: Option<f64>,
        score: u8,
    ) -> ScoredTicker {
        let mut record = TickerRecord::new(ticker);
        record.sector = sector;
        record.metrics.trailing_pe = pe;
        record.metrics.price_to_book = pb;
        scored_record(record, score)
    }

    #[rstest]
    #[case(65, ValueBucket::Undervalued)]
    #[case(100, ValueBucket::Undervalued)]
    #[case(64, ValueBucket::FairValue)]
    #[case(36, ValueBucket::FairValue)]
    #[case(35, ValueBucket::Overvalued)]
    #[case(0, ValueBucket::Overvalued)]
    fn test_classify(#[case] score: u8, #[case] expected: ValueBucket) {
        assert_eq!(BucketThresholds::default().classify(score), expected);
    }

    #[test]
    fn test_universe_summary() {
        let stocks = vec![
            scored("A", Some(10.0), 70),
            scored("B", Some(20.0), 50),
            scored("C", Some(900.0), 30),
            scored("D", None, 65),
        ];
        let summary = UniverseSummary::from_scored(&stocks, &BucketThresholds::default());

        assert_eq!(summary.total_stocks, 4);
        assert_eq!(summary.avg_pe, Some(15.0));
        assert_eq!(summary.buckets.undervalued, 2);
        assert_eq!(summary.buckets.fair_value, 1);
        assert_eq!(summary.buckets.overvalued, 1);
    }

    #[test]
    fn test_universe_summary_without_pe() {
        let stocks = vec![scored("A", None, 50)];
        let summary = UniverseSummary::from_scored(&stocks, &BucketThresholds::default());
        assert_eq!(summary.avg_pe, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["avgPE"].is_null());
        assert_eq!(json["fairValue"], 1);
        assert_eq!(json["totalStocks"], 1);
    }

    #[test]
    fn test_sector_summaries() {
        let stocks = vec![
            with_sector("A", Some(GicsSector::Energy), Some(10.0), Some(1.0), 50),
            with_sector("B", Some(GicsSector::Energy), Some(13.0), Some(2.5), 50),
            with_sector("C", Some(GicsSector::Utilities), None, Some(500.0), 50),
            with_sector("D", Some(GicsSector::Utilities), Some(-4.0), None, 50),
            with_sector("E", None, Some(20.0), Some(3.0), 50),
        ];
        let sectors = summarize_sectors(&stocks);

        assert_eq!(sectors.len(), 2);
        let energy = &sectors[&GicsSector::Energy];
        assert_eq!(energy.avg_pe, Some(11.5));
        assert_eq!(energy.avg_pb, Some(1.8));
        assert_eq!(energy.count, 2);

        let utilities = &sectors[&GicsSector::Utilities];
        assert_eq!(utilities.avg_pe, None);
        assert_eq!(utilities.avg_pb, None);
        assert_eq!(utilities.count, 2);
    }

    #[test]
    fn test_averages_use_unrounded_multiples() {
        let stocks = vec![
            with_sector("A", Some(GicsSector::Energy), Some(499.996), Some(199.999), 50),
            with_sector("B", Some(GicsSector::Energy), Some(10.0), Some(1.0), 50),
        ];
        assert_eq!(stocks[0].pe(), Some(500.0));

        let summary = UniverseSummary::from_scored(&stocks, &BucketThresholds::default());
        assert_eq!(summary.avg_pe, Some(255.0));

        let energy = &summarize_sectors(&stocks)[&GicsSector::Energy];
        assert_eq!(energy.avg_pe, Some(255.0));
        assert_eq!(energy.avg_pb, Some(100.5));
    }

    #[test]
    fn test_sector_map_serializes_by_name() {
        let stocks = vec![with_sector("A", Some(GicsSector::RealEstate), Some(30.0), None, 50)];
        let json = serde_json::to_value(summarize_sectors(&stocks)).unwrap();
        assert_eq!(json["Real Estate"]["avgPE"], 30.0);
        assert!(json["Real Estate"]["avgPB"].is_null());
        assert_eq!(json["Real Estate"]["count"], 1);
    }
}

//! Cross-sectional ranking.
//!
//! Populations are built once per run from the whole universe and are
//! read-only afterwards, so ranking individual tickers can happen in any
//! order or in parallel.

use crate::metric::ValuationMetric;
use crate::percentile::{percentile_or_neutral, sorted_population};
use cadiz_data::TickerRecord;
use serde::{Deserialize, Serialize};

/// Sorted plausible values of one metric across the universe.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPopulation {
    metric: ValuationMetric,
    sorted: Vec<f64>,
}

impl MetricPopulation {
    /// Collect the plausible values of `metric` from `records`.
    pub fn build<'a>(
        metric: ValuationMetric,
        records: impl IntoIterator<Item = &'a TickerRecord>,
    ) -> Self {
        let sorted = sorted_population(records.into_iter().filter_map(|r| metric.value_of(r)));
        Self { metric, sorted }
    }

    /// Metric this population ranks.
    pub const fn metric(&self) -> ValuationMetric {
        self.metric
    }

    /// Population values, ascending.
    pub fn values(&self) -> &[f64] {
        &self.sorted
    }

    /// Number of plausible values.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether no record had a plausible value.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Percentile rank of the record's value, or neutral.
    pub fn rank(&self, record: &TickerRecord) -> u8 {
        percentile_or_neutral(&self.sorted, self.metric.value_of(record))
    }
}

/// Percentile ranks of one ticker on every ranked metric.
///
/// Lower rank means a cheaper multiple relative to peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossSectionalRanks {
    /// Trailing P/E rank.
    pub pe: u8,
    /// Price-to-book rank.
    pub pb: u8,
    /// PEG rank.
    pub peg: u8,
    /// Price-to-sales rank.
    pub ps: u8,
}

impl CrossSectionalRanks {
    /// All four ranks neutral.
    pub const fn neutral() -> Self {
        use crate::percentile::NEUTRAL_PERCENTILE as N;
        Self {
            pe: N,
            pb: N,
            peg: N,
            ps: N,
        }
    }

    /// Rank for one metric.
    pub const fn get(&self, metric: ValuationMetric) -> u8 {
        match metric {
            ValuationMetric::TrailingPe => self.pe,
            ValuationMetric::PriceToBook => self.pb,
            ValuationMetric::Peg => self.peg,
            ValuationMetric::PriceToSales => self.ps,
        }
    }
}

/// Ranks tickers against universe-wide populations of every ranked metric.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionalRanker {
    pe: MetricPopulation,
    pb: MetricPopulation,
    peg: MetricPopulation,
    ps: MetricPopulation,
}

impl CrossSectionalRanker {
    /// Build all populations from the universe.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TickerRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        let ranker = Self {
            pe: MetricPopulation::build(ValuationMetric::TrailingPe, records.clone()),
            pb: MetricPopulation::build(ValuationMetric::PriceToBook, records.clone()),
            peg: MetricPopulation::build(ValuationMetric::Peg, records.clone()),
            ps: MetricPopulation::build(ValuationMetric::PriceToSales, records),
        };

        tracing::debug!(
            pe = ranker.pe.len(),
            pb = ranker.pb.len(),
            peg = ranker.peg.len(),
            ps = ranker.ps.len(),
            "built ranking populations"
        );

        ranker
    }

    /// Population for one metric.
    pub const fn population(&self, metric: ValuationMetric) -> &MetricPopulation {
        match metric {
            ValuationMetric::TrailingPe => &self.pe,
            ValuationMetric::PriceToBook => &self.pb,
            ValuationMetric::Peg => &self.peg,
            ValuationMetric::PriceToSales => &self.ps,
        }
    }

    /// Rank one ticker on one metric.
    pub fn rank(&self, metric: ValuationMetric, record: &TickerRecord) -> u8 {
        self.population(metric).rank(record)
    }

    /// Rank one ticker on every metric.
    pub fn ranks(&self, record: &TickerRecord) -> CrossSectionalRanks {
        CrossSectionalRanks {
            pe: self.pe.rank(record),
            pb: self.pb.rank(record),
            peg: self.peg.rank(record),
            ps: self.ps.rank(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, pe: Option<f64>, pb: Option<f64>) -> TickerRecord {
        let mut r = TickerRecord::new(ticker);
        r.metrics.trailing_pe = pe;
        r.metrics.price_to_book = pb;
        r
    }

    #[test]
    fn test_three_ticker_pe_rank() {
        let universe = vec![
            record("A", Some(10.0), None),
            record("B", Some(20.0), None),
            record("C", Some(30.0), None),
        ];
        let ranker = CrossSectionalRanker::build(&universe);

        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[0]), 33);
        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[1]), 67);
        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[2]), 100);
    }

    #[test]
    fn test_out_of_range_excluded_and_neutral() {
        let universe = vec![
            record("A", Some(10.0), Some(1.0)),
            record("B", Some(800.0), Some(3.0)),
            record("C", Some(-5.0), None),
            record("D", None, Some(2.0)),
        ];
        let ranker = CrossSectionalRanker::build(&universe);

        assert_eq!(ranker.population(ValuationMetric::TrailingPe).len(), 1);
        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[0]), 100);
        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[1]), 50);
        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[2]), 50);
        assert_eq!(ranker.rank(ValuationMetric::TrailingPe, &universe[3]), 50);

        let ranks = ranker.ranks(&universe[3]);
        assert_eq!(ranks.pb, 67);
        assert_eq!(ranks.peg, 50);
        assert_eq!(ranks.ps, 50);
    }

    #[test]
    fn test_empty_population_is_neutral() {
        let universe = vec![record("A", None, None)];
        let ranker = CrossSectionalRanker::build(&universe);
        assert!(ranker.population(ValuationMetric::PriceToSales).is_empty());
        assert_eq!(ranker.ranks(&universe[0]), CrossSectionalRanks::neutral());
    }
}

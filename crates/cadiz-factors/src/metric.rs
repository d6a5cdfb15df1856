//! Ranked valuation metrics.

use cadiz_data::{TickerRecord, ValuationMetrics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A valuation multiple that is ranked across the universe.
///
/// Each metric has an exclusive plausibility range. Values outside it are
/// treated as data errors: excluded from populations and ranked neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationMetric {
    /// Trailing price-to-earnings.
    TrailingPe,
    /// Price-to-book.
    PriceToBook,
    /// Price/earnings-to-growth.
    Peg,
    /// Price-to-sales.
    PriceToSales,
}

impl ValuationMetric {
    /// All ranked metrics.
    pub const ALL: [Self; 4] = [
        Self::TrailingPe,
        Self::PriceToBook,
        Self::Peg,
        Self::PriceToSales,
    ];

    /// Exclusive lower and upper bounds of plausible values.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::TrailingPe => (0.0, 500.0),
            Self::PriceToBook => (0.0, 200.0),
            Self::Peg => (-10.0, 50.0),
            Self::PriceToSales => (0.0, 200.0),
        }
    }

    /// Whether `value` falls strictly inside the plausibility range.
    pub fn is_valid(self, value: f64) -> bool {
        let (lo, hi) = self.bounds();
        value.is_finite() && value > lo && value < hi
    }

    /// The metric's raw value on a record, if present.
    pub const fn raw_value(self, record: &TickerRecord) -> Option<f64> {
        self.raw_metric(&record.metrics)
    }

    /// The metric's raw value in a metric set, if present.
    pub const fn raw_metric(self, metrics: &ValuationMetrics) -> Option<f64> {
        match self {
            Self::TrailingPe => metrics.trailing_pe,
            Self::PriceToBook => metrics.price_to_book,
            Self::Peg => metrics.peg,
            Self::PriceToSales => metrics.price_to_sales,
        }
    }

    /// The metric's value in a metric set, if present and plausible.
    pub fn metric_value(self, metrics: &ValuationMetrics) -> Option<f64> {
        self.raw_metric(metrics).filter(|&v| self.is_valid(v))
    }

    /// The metric's value on a record, if present and plausible.
    pub fn value_of(self, record: &TickerRecord) -> Option<f64> {
        self.raw_value(record).filter(|&v| self.is_valid(v))
    }

    /// Short identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrailingPe => "pe",
            Self::PriceToBook => "pb",
            Self::Peg => "peg",
            Self::PriceToSales => "ps",
        }
    }
}

impl fmt::Display for ValuationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValuationMetric::TrailingPe, 499.9, true)]
    #[case(ValuationMetric::TrailingPe, 500.0, false)]
    #[case(ValuationMetric::TrailingPe, -8.0, false)]
    #[case(ValuationMetric::PriceToBook, 199.0, true)]
    #[case(ValuationMetric::PriceToBook, 250.0, false)]
    #[case(ValuationMetric::Peg, -2.5, true)]
    #[case(ValuationMetric::Peg, -10.0, false)]
    #[case(ValuationMetric::Peg, 50.0, false)]
    #[case(ValuationMetric::PriceToSales, 0.4, true)]
    fn test_validity(#[case] metric: ValuationMetric, #[case] value: f64, #[case] valid: bool) {
        assert_eq!(metric.is_valid(value), valid);
    }

    #[test]
    fn test_value_of() {
        let mut record = TickerRecord::new("T");
        record.metrics.trailing_pe = Some(650.0);
        record.metrics.peg = Some(1.4);

        assert_eq!(ValuationMetric::TrailingPe.raw_value(&record), Some(650.0));
        assert_eq!(ValuationMetric::TrailingPe.value_of(&record), None);
        assert_eq!(ValuationMetric::Peg.value_of(&record), Some(1.4));
        assert_eq!(ValuationMetric::PriceToBook.value_of(&record), None);
        assert_eq!(ValuationMetric::TrailingPe.raw_metric(&record.metrics), Some(650.0));
        assert_eq!(ValuationMetric::Peg.metric_value(&record.metrics), Some(1.4));
    }
}

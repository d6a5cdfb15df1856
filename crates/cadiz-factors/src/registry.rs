//! Metric Registry
//!
//! Central registry of the valuation metrics that feed the composite value
//! score, with their plausibility ranges and default blend weights.

use crate::composite::ScoringWeights;
use crate::metric::ValuationMetric;

/// Metric metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MetricInfo {
    /// Metric selector
    pub metric: ValuationMetric,
    /// Metric name (unique identifier)
    pub name: &'static str,
    /// Brief description of what the metric measures
    pub description: &'static str,
    /// Exclusive plausibility range
    pub valid_range: (f64, f64),
    /// Default weight of the inverted rank in the composite score
    pub default_weight: f64,
}

/// Get all ranked metric info
pub fn available_metrics() -> Vec<MetricInfo> {
    let weights = ScoringWeights::default();
    ValuationMetric::ALL
        .into_iter()
        .map(|metric| MetricInfo {
            metric,
            name: metric.name(),
            description: describe(metric),
            valid_range: metric.bounds(),
            default_weight: weights.weight_of(metric),
        })
        .collect()
}

const fn describe(metric: ValuationMetric) -> &'static str {
    match metric {
        ValuationMetric::TrailingPe => "Trailing price to earnings per share",
        ValuationMetric::PriceToBook => "Price to book value per share",
        ValuationMetric::Peg => "P/E divided by expected earnings growth",
        ValuationMetric::PriceToSales => "Market cap to trailing twelve month revenue",
    }
}

/// Get metric info by name
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.name == name)
}

/// List all metric names
pub fn list_metric_names() -> Vec<&'static str> {
    available_metrics().into_iter().map(|m| m.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_available_metrics_count() {
        assert_eq!(available_metrics().len(), 4);
    }

    #[test]
    fn test_get_metric_info() {
        let pe = get_metric_info("pe").unwrap();
        assert_eq!(pe.metric, ValuationMetric::TrailingPe);
        assert_eq!(pe.valid_range, (0.0, 500.0));
        assert_relative_eq!(pe.default_weight, 0.30);

        assert!(get_metric_info("ev_ebitda").is_none());
    }

    #[test]
    fn test_list_metric_names() {
        assert_eq!(list_metric_names(), vec!["pe", "pb", "peg", "ps"]);
    }

    #[test]
    fn test_metric_weights_leave_room_for_discount() {
        let total: f64 = available_metrics().iter().map(|m| m.default_weight).sum();
        assert_relative_eq!(total + ScoringWeights::default().discount, 1.0, epsilon = 1e-12);
    }
}

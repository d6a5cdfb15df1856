#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cadiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analog;
pub mod composite;
pub mod cross_section;
pub mod engine;
pub mod history_percentile;
pub mod metric;
pub mod percentile;
pub mod registry;
pub mod signal;

pub use analog::{AnalogCase, AnalogConfig, AnalogReturns, AnalogSummary};
pub use composite::{CompositeConfig, CompositeScorer, ScoringWeights};
pub use cross_section::{CrossSectionalRanker, CrossSectionalRanks, MetricPopulation};
pub use engine::{EngineConfig, ValueAssessment, ValueEngine};
pub use history_percentile::{HistoryPercentile, HistoryPercentileConfig};
pub use metric::ValuationMetric;
pub use percentile::{NEUTRAL_PERCENTILE, percentile_rank};
pub use signal::Signal;

// Re-export registry types for convenience
pub use registry::{MetricInfo, available_metrics, get_metric_info, list_metric_names};

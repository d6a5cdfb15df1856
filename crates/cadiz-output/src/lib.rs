#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cadiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;
pub mod scored;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter};
pub use report::ScreenerReport;
pub use scored::{PeHistoryEntry, ScoredTicker, sort_by_pe};
pub use summary::{
    BucketCounts, BucketThresholds, SectorSummary, UniverseSummary, ValueBucket, summarize_sectors,
};

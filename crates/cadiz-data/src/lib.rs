#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cadiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod history;
pub mod normalize;
pub mod prices;
pub mod record;
pub mod snapshot;
pub mod universe;

pub use error::{DataError, Result};
pub use history::{MetricHistory, MetricHistoryPoint};
pub use normalize::{FieldKind, normalize, normalize_value, round_to};
pub use prices::{PricePoint, PriceSeries};
pub use record::{TickerRecord, ValuationMetrics};
pub use snapshot::{TickerInput, UniverseSnapshot};
pub use universe::{Constituent, GicsSector, SP500Universe, Universe};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

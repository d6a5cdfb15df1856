#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cadiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use cadiz_data as data;
pub use cadiz_factors as factors;
pub use cadiz_output as output;

pub use config::ScreenerConfig;
pub use error::{Result, ScreenError};
pub use pipeline::Screener;

// Re-export common universe types
pub use cadiz_data::universe::{GicsSector, SP500Universe, Universe};

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

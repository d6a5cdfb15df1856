//! Screener configuration.
//!
//! Every tunable of a run lives here. Defaults reproduce the standard
//! screening policy; a JSON file may override any subset of fields.
//!
//! ```json
//! { "composite": { "weights": { "pe": 0.4, "discount": 0.05 } },
//!   "analog": { "band": 0.10 },
//!   "limit": 50 }
//! ```

use crate::error::{Result, ScreenError};
use cadiz_factors::{AnalogConfig, CompositeConfig, EngineConfig, HistoryPercentileConfig};
use cadiz_output::BucketThresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Composite score weights and discount multiplier
    pub composite: CompositeConfig,
    /// Own-history percentile settings
    pub history: HistoryPercentileConfig,
    /// Analog return settings
    pub analog: AnalogConfig,
    /// Value bucket thresholds
    pub buckets: BucketThresholds,
    /// Trailing P/E history window in years (default: 5)
    pub history_window_years: u32,
    /// Score at most this many tickers, in snapshot order (default: all)
    pub limit: Option<usize>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            composite: CompositeConfig::default(),
            history: HistoryPercentileConfig::default(),
            analog: AnalogConfig::default(),
            buckets: BucketThresholds::default(),
            history_window_years: 5,
            limit: None,
        }
    }
}

impl ScreenerConfig {
    /// Default config file location: `<config dir>/cadiz/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cadiz").join("config.json"))
    }

    /// Read a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| ScreenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise the default location is used if
    /// present, and built-in defaults if not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::info!(path = %path.display(), "loading config");
            return Self::from_path(path);
        }

        match Self::default_path().filter(|p| p.is_file()) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading config");
                Self::from_path(path)
            }
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Settings for the analytics engine.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            composite: self.composite.clone(),
            history: self.history.clone(),
            analog: self.analog.clone(),
        }
    }
}

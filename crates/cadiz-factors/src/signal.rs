//! Per-ticker signal trait.

use cadiz_data::TickerInput;

/// A configurable computation over a single ticker's own data.
///
/// Implementations never fail: insufficient or malformed input yields the
/// signal's documented neutral or empty output.
pub trait Signal {
    /// Tunable parameters.
    type Config: Default + Clone;

    /// Result for one ticker.
    type Output;

    /// Signal name (unique identifier).
    fn name(&self) -> &'static str;

    /// Create the signal with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Current configuration.
    fn config(&self) -> &Self::Config;

    /// Evaluate the signal for one ticker.
    fn evaluate(&self, input: &TickerInput) -> Self::Output;
}

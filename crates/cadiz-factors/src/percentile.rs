//! Shared percentile policy.
//!
//! Cross-sectional ranks and own-history percentiles use the same formula and
//! the same neutral fallback, both defined here.

/// Percentile emitted whenever a rank cannot be computed: the value is
/// absent or out of range, or the population is empty or too small.
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// Percentile rank of `value` within an ascending-sorted population.
///
/// Computed as the share of population values `<= value`, times 100, rounded
/// to the nearest integer. Returns `None` for an empty population.
///
/// # Examples
///
/// ```
/// use cadiz_factors::percentile::percentile_rank;
///
/// let population = [10.0, 20.0, 30.0];
/// assert_eq!(percentile_rank(&population, 20.0), Some(67));
/// assert_eq!(percentile_rank(&population, 30.0), Some(100));
/// assert_eq!(percentile_rank(&[], 30.0), None);
/// ```
pub fn percentile_rank(sorted: &[f64], value: f64) -> Option<u8> {
    if sorted.is_empty() {
        return None;
    }
    let at_or_below = sorted.partition_point(|&v| v <= value);
    let pct = (at_or_below as f64 / sorted.len() as f64 * 100.0).round();
    Some(pct.clamp(0.0, 100.0) as u8)
}

/// Percentile rank, falling back to [`NEUTRAL_PERCENTILE`].
pub fn percentile_or_neutral(sorted: &[f64], value: Option<f64>) -> u8 {
    value
        .and_then(|v| percentile_rank(sorted, v))
        .unwrap_or(NEUTRAL_PERCENTILE)
}

/// Sort a population ascending, dropping non-finite values.
pub fn sorted_population(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    values.sort_by(f64::total_cmp);
    values
}

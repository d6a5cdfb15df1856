//! Metric normalization.
//!
//! Raw provider fields arrive as numbers, numeric strings, `null`, the string
//! `"Infinity"`, or not at all. Normalization maps each one to either a finite
//! value inside a plausible envelope for its kind, or `None`. Nothing here
//! ever fails: malformed input simply becomes absent.

use serde_json::Value;

/// Kind of raw field, which determines its plausible envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Valuation multiple (P/E, P/B, P/S, PEG, EV/EBITDA). May be negative,
    /// never exactly zero.
    Multiple,
    /// Share price or 52-week high/low.
    Price,
    /// Market capitalization.
    MarketCap,
    /// Dividend yield in percent.
    DividendYield,
    /// Return on equity in percent.
    ReturnOnEquity,
}

impl FieldKind {
    /// Whether a finite value lies inside this kind's envelope.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Self::Multiple => value != 0.0 && value.abs() < 1e5,
            Self::Price => value > 0.0 && value < 1e7,
            Self::MarketCap => value > 0.0 && value < 1e15,
            Self::DividendYield => (0.0..=100.0).contains(&value),
            Self::ReturnOnEquity => value.abs() < 1e4,
        }
    }
}

/// Normalize a numeric field.
///
/// Returns the value unchanged when it is finite and plausible for `kind`.
///
/// # Examples
///
/// ```
/// use cadiz_data::normalize::{FieldKind, normalize};
///
/// assert_eq!(normalize(FieldKind::Multiple, 18.5), Some(18.5));
/// assert_eq!(normalize(FieldKind::Multiple, f64::INFINITY), None);
/// assert_eq!(normalize(FieldKind::Price, -3.0), None);
/// ```
pub fn normalize(kind: FieldKind, value: f64) -> Option<f64> {
    (value.is_finite() && kind.accepts(value)).then_some(value)
}

/// Normalize a raw JSON field.
///
/// Numbers and numeric strings are accepted. `null`, booleans, arrays,
/// objects, unparseable strings, `"Infinity"` and `"NaN"` are absent.
pub fn normalize_value(kind: FieldKind, raw: Option<&Value>) -> Option<f64> {
    let value = match raw? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    normalize(kind, value)
}

/// Round half away from zero to a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use cadiz_data::normalize::round_to;
///
/// assert_eq!(round_to(12.345_6, 2), 12.35);
/// assert_eq!(round_to(-0.25, 1), -0.3);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(FieldKind::Multiple, 25.0, true)]
    #[case(FieldKind::Multiple, -4.2, true)]
    #[case(FieldKind::Multiple, 0.0, false)]
    #[case(FieldKind::Multiple, 250_000.0, false)]
    #[case(FieldKind::Price, 0.0, false)]
    #[case(FieldKind::Price, 101.5, true)]
    #[case(FieldKind::MarketCap, 3.4e12, true)]
    #[case(FieldKind::MarketCap, -1.0, false)]
    #[case(FieldKind::DividendYield, 0.0, true)]
    #[case(FieldKind::DividendYield, 140.0, false)]
    #[case(FieldKind::ReturnOnEquity, -35.0, true)]
    #[case(FieldKind::ReturnOnEquity, 20_000.0, false)]
    fn test_envelopes(#[case] kind: FieldKind, #[case] value: f64, #[case] accepted: bool) {
        assert_eq!(normalize(kind, value).is_some(), accepted);
    }

    #[test]
    fn test_non_finite_is_absent() {
        for v in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(normalize(FieldKind::Multiple, v), None);
        }
    }

    #[test]
    fn test_json_values() {
        assert_eq!(
            normalize_value(FieldKind::Multiple, Some(&json!(12.5))),
            Some(12.5)
        );
        assert_eq!(
            normalize_value(FieldKind::Multiple, Some(&json!("14.25"))),
            Some(14.25)
        );
        assert_eq!(
            normalize_value(FieldKind::Multiple, Some(&json!("Infinity"))),
            None
        );
        assert_eq!(normalize_value(FieldKind::Multiple, Some(&json!("NaN"))), None);
        assert_eq!(normalize_value(FieldKind::Multiple, Some(&json!("n/a"))), None);
        assert_eq!(normalize_value(FieldKind::Multiple, Some(&Value::Null)), None);
        assert_eq!(normalize_value(FieldKind::Multiple, Some(&json!(true))), None);
        assert_eq!(normalize_value(FieldKind::Multiple, None), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(66.666_666, 0), 67.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(28.44, 1), 28.4);
    }
}

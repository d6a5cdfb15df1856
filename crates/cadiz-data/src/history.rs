//! Valuation metric history.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One observation of a valuation metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricHistoryPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Metric value.
    pub value: f64,
}

impl MetricHistoryPoint {
    /// Create a new history point.
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Date-ordered history of a single metric for a single ticker.
///
/// Dates are strictly increasing and every value is finite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricHistory {
    points: Vec<MetricHistoryPoint>,
}

impl MetricHistory {
    /// Build a history from unordered points.
    ///
    /// Non-finite values are dropped. When several points share a date the
    /// first one supplied is kept.
    pub fn new(points: impl IntoIterator<Item = MetricHistoryPoint>) -> Self {
        let mut points: Vec<_> = points.into_iter().filter(|p| p.value.is_finite()).collect();
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    /// All points in date order.
    pub fn points(&self) -> &[MetricHistoryPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values in date order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Most recent point.
    pub fn latest(&self) -> Option<&MetricHistoryPoint> {
        self.points.last()
    }

    /// Points within `years` of the most recent point, inclusive.
    pub fn trailing_years(&self, years: u32) -> Self {
        let Some(latest) = self.latest() else {
            return Self::default();
        };
        let Some(cutoff) = years
            .checked_mul(12)
            .and_then(|months| latest.date.checked_sub_months(Months::new(months)))
        else {
            return self.clone();
        };
        Self {
            points: self
                .points
                .iter()
                .filter(|p| p.date >= cutoff)
                .copied()
                .collect(),
        }
    }
}

/// Parse a history date.
///
/// Accepts `YYYY-MM-DD`, or `YYYY-MM` which resolves to the first of the month.
///
/// # Examples
///
/// ```
/// use cadiz_data::history::parse_period_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_period_date("2023-06"), NaiveDate::from_ymd_opt(2023, 6, 1));
/// assert_eq!(parse_period_date("2023-06-30"), NaiveDate::from_ymd_opt(2023, 6, 30));
/// assert_eq!(parse_period_date("June 2023"), None);
/// ```
pub fn parse_period_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    let (year, month) = raw.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Serde helpers that write dates as `YYYY-MM` and read either form
/// accepted by [`parse_period_date`].
///
/// ```
/// use chrono::NaiveDate;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Row {
///     #[serde(with = "cadiz_data::history::year_month")]
///     date: NaiveDate,
/// }
///
/// let row = Row { date: NaiveDate::from_ymd_opt(2022, 9, 30).unwrap() };
/// assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"date":"2022-09"}"#);
/// ```
pub mod year_month {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serialize as `YYYY-MM`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m"))
    }

    /// Deserialize from `YYYY-MM` or `YYYY-MM-DD`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_period_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

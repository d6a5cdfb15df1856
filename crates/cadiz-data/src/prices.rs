//! Daily closing price series.

use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub const fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Date-sorted daily closes for one ticker.
///
/// Closes are finite and positive; each date appears once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from unordered points, dropping unusable closes.
    pub fn new(points: impl IntoIterator<Item = PricePoint>) -> Self {
        let mut points: Vec<_> = points
            .into_iter()
            .filter(|p| p.close.is_finite() && p.close > 0.0)
            .collect();
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    /// All points in date order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of trading days.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closest trading day to `date`.
    ///
    /// When two days are equally distant the earlier one wins.
    pub fn nearest(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date < date);
        let after = self.points.get(idx);
        let before = idx.checked_sub(1).and_then(|i| self.points.get(i));

        match (before, after) {
            (Some(b), Some(a)) => {
                let gap_before = (date - b.date).num_days();
                let gap_after = (a.date - date).num_days();
                if gap_after < gap_before { Some(a) } else { Some(b) }
            }
            (Some(b), None) => Some(b),
            (None, a) => a,
        }
    }

    /// Closest trading day to `date`, accepted only within `tolerance_days`.
    pub fn nearest_within(&self, date: NaiveDate, tolerance_days: i64) -> Option<&PricePoint> {
        self.nearest(date)
            .filter(|p| (p.date - date).num_days().abs() <= tolerance_days)
    }

    /// Read a `date,close` CSV.
    ///
    /// Rows with an unparseable date or close are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        #[derive(Deserialize)]
        struct Row {
            date: String,
            close: String,
        }

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut points = Vec::new();
        for row in rdr.deserialize::<Row>() {
            let row = row?;
            let parsed = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .ok()
                .zip(row.close.parse::<f64>().ok());
            match parsed {
                Some((date, close)) => points.push(PricePoint::new(date, close)),
                None => tracing::debug!(date = %row.date, close = %row.close, "skipping price row"),
            }
        }

        Ok(Self::new(points))
    }

    /// Read a `date,close` CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series() -> PriceSeries {
        PriceSeries::new([
            PricePoint::new(date(2024, 1, 10), 110.0),
            PricePoint::new(date(2024, 1, 2), 100.0),
            PricePoint::new(date(2024, 1, 6), 105.0),
            PricePoint::new(date(2024, 1, 8), -1.0),
        ])
    }

    #[test]
    fn test_construction_filters_and_sorts() {
        let s = series();
        assert_eq!(s.len(), 3);
        assert_eq!(s.points()[0].date, date(2024, 1, 2));
    }

    #[test]
    fn test_nearest() {
        let s = series();
        assert_eq!(s.nearest(date(2024, 1, 5)).unwrap().close, 105.0);
        assert_eq!(s.nearest(date(2023, 12, 1)).unwrap().close, 100.0);
        assert_eq!(s.nearest(date(2024, 3, 1)).unwrap().close, 110.0);
        assert_eq!(s.nearest(date(2024, 1, 6)).unwrap().close, 105.0);
        assert!(PriceSeries::default().nearest(date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_nearest_tie_prefers_earlier() {
        let s = series();
        // 2024-01-04 sits two days from both 01-02 and 01-06.
        assert_eq!(s.nearest(date(2024, 1, 4)).unwrap().date, date(2024, 1, 2));
    }

    #[test]
    fn test_nearest_within() {
        let s = series();
        assert!(s.nearest_within(date(2024, 1, 20), 10).is_some());
        assert!(s.nearest_within(date(2024, 1, 21), 10).is_none());
        assert!(s.nearest_within(date(2023, 12, 23), 10).is_some());
    }

    #[test]
    fn test_from_csv() {
        let data = "date,close\n2024-01-03,101.5\n2024-01-02, 100.0\nbad,1\n2024-01-04,abc\n";
        let s = PriceSeries::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[0].close, 100.0);
        assert_eq!(s.points()[1].date, date(2024, 1, 3));
    }
}

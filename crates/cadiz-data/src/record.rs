//! Canonical per-ticker record.

use crate::normalize::round_to;
use crate::universe::GicsSector;
use serde::{Deserialize, Serialize};

/// Valuation metrics for one ticker.
///
/// Every field is either a finite, plausible number or `None`. Absence is
/// never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationMetrics {
    /// Trailing price-to-earnings.
    #[serde(rename = "pe")]
    pub trailing_pe: Option<f64>,
    /// Forward price-to-earnings.
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    /// Price-to-book.
    #[serde(rename = "pb")]
    pub price_to_book: Option<f64>,
    /// Price-to-sales (trailing twelve months).
    #[serde(rename = "ps")]
    pub price_to_sales: Option<f64>,
    /// Price/earnings-to-growth.
    pub peg: Option<f64>,
    /// Enterprise value to EBITDA.
    #[serde(rename = "evEbitda")]
    pub ev_to_ebitda: Option<f64>,
    /// Dividend yield in percent.
    pub dividend_yield: Option<f64>,
    /// Return on equity in percent.
    #[serde(rename = "roe")]
    pub return_on_equity: Option<f64>,
    /// 52-week high.
    #[serde(rename = "high52w")]
    pub high_52w: Option<f64>,
    /// 52-week low.
    #[serde(rename = "low52w")]
    pub low_52w: Option<f64>,
}

/// One stock for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerRecord {
    /// Ticker symbol.
    pub ticker: String,
    /// Display name. Falls back to the ticker when unknown.
    pub name: String,
    /// GICS sector, absent when the source label is not recognized.
    pub sector: Option<GicsSector>,
    /// Free-form industry label.
    pub industry: Option<String>,
    /// Current share price.
    pub price: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Valuation metrics.
    #[serde(flatten)]
    pub metrics: ValuationMetrics,
}

impl TickerRecord {
    /// Create a record with only an identifier; everything else absent.
    pub fn new(ticker: impl Into<String>) -> Self {
        let ticker = ticker.into();
        Self {
            name: ticker.clone(),
            ticker,
            sector: None,
            industry: None,
            price: None,
            market_cap: None,
            metrics: ValuationMetrics::default(),
        }
    }

    /// Percentage distance of the current price from the 52-week high,
    /// rounded to two decimals.
    ///
    /// Negative means below the high. Absent when either input is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadiz_data::TickerRecord;
    ///
    /// let mut record = TickerRecord::new("XOM");
    /// record.price = Some(70.0);
    /// record.metrics.high_52w = Some(100.0);
    /// assert_eq!(record.discount_52w(), Some(-30.0));
    /// ```
    pub fn discount_52w(&self) -> Option<f64> {
        let price = self.price?;
        let high = self.metrics.high_52w?;
        Some(round_to((price - high) / high * 100.0, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_record_is_empty() {
        let record = TickerRecord::new("AAPL");
        assert_eq!(record.name, "AAPL");
        assert_eq!(record.metrics, ValuationMetrics::default());
        assert_eq!(record.discount_52w(), None);
    }

    #[test]
    fn test_discount_52w() {
        let mut record = TickerRecord::new("MSFT");
        record.price = Some(410.0);
        record.metrics.high_52w = Some(468.35);
        assert_relative_eq!(record.discount_52w().unwrap(), -12.46);

        record.price = Some(500.0);
        assert!(record.discount_52w().unwrap() > 0.0);

        record.metrics.high_52w = None;
        assert_eq!(record.discount_52w(), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut record = TickerRecord::new("KO");
        record.sector = Some(GicsSector::ConsumerStaples);
        record.market_cap = Some(2.7e11);
        record.metrics.trailing_pe = Some(24.1);
        record.metrics.forward_pe = Some(21.0);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ticker"], "KO");
        assert_eq!(json["sector"], "Consumer Staples");
        assert_eq!(json["marketCap"], 2.7e11);
        assert_eq!(json["pe"], 24.1);
        assert_eq!(json["forwardPE"], 21.0);
        assert!(json["evEbitda"].is_null());
        assert!(json.get("high52w").is_some());
    }
}

//! Universe snapshot loading.
//!
//! A snapshot is the already-fetched input for one run: a list of ticker
//! entries, each carrying current fundamentals plus optional P/E history and
//! daily closes. Entries are decoded one at a time so a single malformed
//! ticker is logged and skipped without affecting the rest.
//!
//! ```json
//! { "asOf": "2025-02-08",
//!   "tickers": [ { "ticker": "AAPL", "pe": 35.2, "high52w": 260.1,
//!                  "peHistory": [ { "date": "2021-03", "pe": 28.4 } ],
//!                  "prices": [ { "date": "2021-01-04", "close": 129.4 } ] } ] }
//! ```

use crate::error::{DataError, Result};
use crate::history::{MetricHistory, MetricHistoryPoint, parse_period_date};
use crate::normalize::{FieldKind, normalize_value};
use crate::prices::{PricePoint, PriceSeries};
use crate::record::{TickerRecord, ValuationMetrics};
use crate::universe::{GicsSector, SP500Universe};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

/// Everything the analytics need for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerInput {
    /// Normalized current record.
    pub record: TickerRecord,
    /// Trailing P/E history.
    pub pe_history: MetricHistory,
    /// Daily closes.
    pub prices: PriceSeries,
}

impl TickerInput {
    /// Input with no history and no prices.
    pub fn new(record: TickerRecord) -> Self {
        Self {
            record,
            pe_history: MetricHistory::default(),
            prices: PriceSeries::default(),
        }
    }

    /// Attach a P/E history.
    pub fn with_pe_history(mut self, history: MetricHistory) -> Self {
        self.pe_history = history;
        self
    }

    /// Attach a price series.
    pub fn with_prices(mut self, prices: PriceSeries) -> Self {
        self.prices = prices;
        self
    }
}

/// The input universe for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniverseSnapshot {
    /// Free-form date label of the snapshot, if supplied.
    pub as_of: Option<String>,
    /// Tickers in snapshot order.
    pub tickers: Vec<TickerInput>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Wrapped(RawSnapshot),
    Bare(Vec<Value>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    as_of: Option<Value>,
    #[serde(alias = "stocks")]
    tickers: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTickerEntry {
    #[serde(alias = "symbol")]
    ticker: String,
    name: Option<Value>,
    sector: Option<Value>,
    industry: Option<Value>,
    price: Option<Value>,
    market_cap: Option<Value>,
    #[serde(alias = "trailingPE")]
    pe: Option<Value>,
    #[serde(rename = "forwardPE")]
    forward_pe: Option<Value>,
    pb: Option<Value>,
    ps: Option<Value>,
    peg: Option<Value>,
    ev_ebitda: Option<Value>,
    dividend_yield: Option<Value>,
    roe: Option<Value>,
    #[serde(rename = "high52w")]
    high_52w: Option<Value>,
    #[serde(rename = "low52w")]
    low_52w: Option<Value>,
    pe_history: Option<Value>,
    prices: Option<Value>,
}

#[derive(Deserialize)]
struct RawHistoryPoint {
    date: String,
    #[serde(alias = "value")]
    pe: Option<Value>,
}

#[derive(Deserialize)]
struct RawPricePoint {
    date: String,
    close: Option<Value>,
}

impl UniverseSnapshot {
    /// Parse a JSON snapshot, filling names and sectors from the S&P 500 list.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with(json, &SP500Universe::new())
    }

    /// Parse a JSON snapshot, filling names and sectors from `universe`.
    ///
    /// Accepts either `{ "asOf": ..., "tickers": [...] }` or a bare array of
    /// entries. Entries that cannot be decoded, have an empty ticker, or repeat
    /// an earlier ticker are skipped with a warning. Bare `NaN` and
    /// `Infinity` tokens are read as `null`.
    pub fn from_json_str_with(json: &str, universe: &SP500Universe) -> Result<Self> {
        let json = null_non_finite(json);
        let (as_of, entries) = match serde_json::from_str::<RawDocument>(&json)? {
            RawDocument::Wrapped(raw) => (text(raw.as_of), raw.tickers),
            RawDocument::Bare(entries) => (None, entries),
        };

        let total = entries.len();
        let mut seen = HashSet::with_capacity(total);
        let mut tickers = Vec::with_capacity(total);

        for (idx, entry) in entries.into_iter().enumerate() {
            match decode_entry(entry, universe) {
                Ok(input) => {
                    if seen.insert(input.record.ticker.clone()) {
                        tickers.push(input);
                    } else {
                        tracing::warn!(ticker = %input.record.ticker, "skipping duplicate ticker");
                    }
                }
                Err(err) => tracing::warn!(index = idx, error = %err, "skipping snapshot entry"),
            }
        }

        if tickers.is_empty() {
            return Err(DataError::EmptyUniverse);
        }

        tracing::info!(
            loaded = tickers.len(),
            skipped = total - tickers.len(),
            "loaded snapshot"
        );

        Ok(Self { as_of, tickers })
    }

    /// Read and parse a JSON snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load `<TICKER>.csv` price files from `dir`, replacing inline prices.
    ///
    /// Returns the number of tickers that received a series. A file that fails
    /// to parse is logged and leaves that ticker unchanged.
    pub fn attach_prices_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DataError::NotADirectory(dir.to_path_buf()));
        }

        let mut attached = 0;
        for input in &mut self.tickers {
            let path = dir.join(format!("{}.csv", input.record.ticker));
            if !path.is_file() {
                continue;
            }
            match PriceSeries::from_csv_path(&path) {
                Ok(series) => {
                    tracing::debug!(ticker = %input.record.ticker, days = series.len(), "attached prices");
                    input.prices = series;
                    attached += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to read price file");
                }
            }
        }

        Ok(attached)
    }

    /// Keep at most `limit` tickers, in snapshot order.
    pub fn truncate(&mut self, limit: usize) {
        self.tickers.truncate(limit);
    }

    /// Number of tickers.
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Whether the snapshot has no tickers.
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl FromIterator<TickerInput> for UniverseSnapshot {
    fn from_iter<I: IntoIterator<Item = TickerInput>>(iter: I) -> Self {
        Self {
            as_of: None,
            tickers: iter.into_iter().collect(),
        }
    }
}

const NON_FINITE_TOKENS: [&str; 4] = ["-Infinity", "+Infinity", "Infinity", "NaN"];

/// Rewrite non-finite number tokens outside string literals to `null`.
fn null_non_finite(json: &str) -> Cow<'_, str> {
    if !json.contains("Infinity") && !json.contains("NaN") {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len());
    let mut rest = json;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    Cow::Owned(out)
}

/// Trimmed non-empty string, or absent for anything else.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Array elements, or nothing for `null` and non-arrays.
fn elements(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn decode_entry(entry: Value, universe: &SP500Universe) -> Result<TickerInput> {
    let raw: RawTickerEntry = serde_json::from_value(entry)?;

    let ticker = raw.ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(DataError::InvalidSymbol(raw.ticker));
    }

    let known = universe.constituent(&ticker);

    let sector = match text(raw.sector) {
        Some(label) => {
            let parsed = GicsSector::from_name(&label);
            if parsed.is_none() {
                tracing::warn!(ticker = %ticker, sector = %label, "unknown sector");
            }
            parsed
        }
        None => known.map(|c| c.sector),
    };

    let name = text(raw.name)
        .or_else(|| known.map(|c| c.name.clone()))
        .unwrap_or_else(|| ticker.clone());

    let metrics = ValuationMetrics {
        trailing_pe: normalize_value(FieldKind::Multiple, raw.pe.as_ref()),
        forward_pe: normalize_value(FieldKind::Multiple, raw.forward_pe.as_ref()),
        price_to_book: normalize_value(FieldKind::Multiple, raw.pb.as_ref()),
        price_to_sales: normalize_value(FieldKind::Multiple, raw.ps.as_ref()),
        peg: normalize_value(FieldKind::Multiple, raw.peg.as_ref()),
        ev_to_ebitda: normalize_value(FieldKind::Multiple, raw.ev_ebitda.as_ref()),
        dividend_yield: normalize_value(FieldKind::DividendYield, raw.dividend_yield.as_ref()),
        return_on_equity: normalize_value(FieldKind::ReturnOnEquity, raw.roe.as_ref()),
        high_52w: normalize_value(FieldKind::Price, raw.high_52w.as_ref()),
        low_52w: normalize_value(FieldKind::Price, raw.low_52w.as_ref()),
    };

    let record = TickerRecord {
        name,
        sector,
        industry: text(raw.industry),
        price: normalize_value(FieldKind::Price, raw.price.as_ref()),
        market_cap: normalize_value(FieldKind::MarketCap, raw.market_cap.as_ref()),
        metrics,
        ticker,
    };

    let pe_history = MetricHistory::new(elements(raw.pe_history).into_iter().filter_map(|point| {
        let point: RawHistoryPoint = serde_json::from_value(point).ok()?;
        let date = parse_period_date(&point.date);
        let value = normalize_value(FieldKind::Multiple, point.pe.as_ref());
        if date.is_none() || value.is_none() {
            tracing::debug!(ticker = %record.ticker, date = %point.date, "dropping history point");
        }
        Some(MetricHistoryPoint::new(date?, value?))
    }));

    let prices = PriceSeries::new(elements(raw.prices).into_iter().filter_map(|point| {
        let point: RawPricePoint = serde_json::from_value(point).ok()?;
        let date = NaiveDate::parse_from_str(point.date.trim(), "%Y-%m-%d").ok()?;
        let close = normalize_value(FieldKind::Price, point.close.as_ref())?;
        Some(PricePoint::new(date, close))
    }));

    Ok(TickerInput {
        record,
        pe_history,
        prices,
    })
}

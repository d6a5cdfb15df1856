//! Export functionality for screener output.
//!
//! JSON exports carry the full nested structure. CSV exports flatten each
//! scored ticker to one row; history and analog cases are reduced to their
//! aggregates.

use crate::report::ScreenerReport;
use crate::scored::ScoredTicker;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "pretty" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One CSV row per scored ticker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredTickerRow<'a> {
    ticker: &'a str,
    name: &'a str,
    sector: Option<&'static str>,
    industry: Option<&'a str>,
    price: Option<f64>,
    market_cap: Option<f64>,
    pe: Option<f64>,
    #[serde(rename = "forwardPE")]
    forward_pe: Option<f64>,
    pb: Option<f64>,
    ps: Option<f64>,
    peg: Option<f64>,
    ev_ebitda: Option<f64>,
    dividend_yield: Option<f64>,
    roe: Option<f64>,
    #[serde(rename = "high52w")]
    high_52w: Option<f64>,
    #[serde(rename = "low52w")]
    low_52w: Option<f64>,
    #[serde(rename = "discount52w")]
    discount_52w: Option<f64>,
    value_score: u8,
    pe_rank: u8,
    pb_rank: u8,
    peg_rank: u8,
    ps_rank: u8,
    pe_percentile: u8,
    similar_count: usize,
    #[serde(rename = "avg6mReturn")]
    avg_6m_return: Option<f64>,
    win_rate: Option<u8>,
}

impl<'a> From<&'a ScoredTicker> for ScoredTickerRow<'a> {
    fn from(s: &'a ScoredTicker) -> Self {
        let m = &s.record.metrics;
        Self {
            ticker: &s.record.ticker,
            name: &s.record.name,
            sector: s.record.sector.map(|sector| sector.name()),
            industry: s.record.industry.as_deref(),
            price: s.record.price,
            market_cap: s.record.market_cap,
            pe: m.trailing_pe,
            forward_pe: m.forward_pe,
            pb: m.price_to_book,
            ps: m.price_to_sales,
            peg: m.peg,
            ev_ebitda: m.ev_to_ebitda,
            dividend_yield: m.dividend_yield,
            roe: m.return_on_equity,
            high_52w: m.high_52w,
            low_52w: m.low_52w,
            discount_52w: s.discount_52w,
            value_score: s.value_score,
            pe_rank: s.pe_rank,
            pb_rank: s.pb_rank,
            peg_rank: s.peg_rank,
            ps_rank: s.ps_rank,
            pe_percentile: s.pe_percentile,
            similar_count: s.hist_performance.similar_count,
            avg_6m_return: s.hist_performance.avg_6m_return,
            win_rate: s.hist_performance.win_rate,
        }
    }
}

fn stocks_to_csv(stocks: &[ScoredTicker]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for stock in stocks {
        wtr.serialize(ScoredTickerRow::from(stock))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for ScreenerReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => stocks_to_csv(&self.stocks),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<ScoredTicker> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => stocks_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

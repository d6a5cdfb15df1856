//! Screener report.
//!
//! The report is the static artifact a dashboard reads:
//! `{ lastUpdated, summary, stocks, sectors }`.

use crate::export::ExportError;
use crate::scored::{ScoredTicker, sort_by_pe};
use crate::summary::{BucketThresholds, SectorSummary, UniverseSummary, fmt_opt, summarize_sectors};
use cadiz_data::GicsSector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full output of one screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerReport {
    /// Caller-supplied generation timestamp.
    pub last_updated: String,
    /// Universe-level summary.
    pub summary: UniverseSummary,
    /// Scored tickers, by ascending P/E with absent P/E last.
    pub stocks: Vec<ScoredTicker>,
    /// Per-sector averages.
    pub sectors: BTreeMap<GicsSector, SectorSummary>,
}

impl ScreenerReport {
    /// Sort `stocks` and aggregate them into a report.
    pub fn new(
        last_updated: impl Into<String>,
        mut stocks: Vec<ScoredTicker>,
        thresholds: &BucketThresholds,
    ) -> Self {
        sort_by_pe(&mut stocks);
        let summary = UniverseSummary::from_scored(&stocks, thresholds);
        let sectors = summarize_sectors(&stocks);

        tracing::info!(
            total = summary.total_stocks,
            undervalued = summary.buckets.undervalued,
            fair_value = summary.buckets.fair_value,
            overvalued = summary.buckets.overvalued,
            "aggregated screener report"
        );

        Self {
            last_updated: last_updated.into(),
            summary,
            stocks,
            sectors,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a scored ticker.
    pub fn stock(&self, ticker: &str) -> Option<&ScoredTicker> {
        self.stocks.iter().find(|s| s.record.ticker == ticker)
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nValue Screen: {}\n", self.last_updated));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str("\nUniverse:\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "  Stocks:                   {}\n",
            self.summary.total_stocks
        ));
        output.push_str(&format!(
            "  Average P/E:              {}\n",
            fmt_opt(self.summary.avg_pe)
        ));
        output.push_str(&format!(
            "  Undervalued:              {}\n",
            self.summary.buckets.undervalued
        ));
        output.push_str(&format!(
            "  Fair value:               {}\n",
            self.summary.buckets.fair_value
        ));
        output.push_str(&format!(
            "  Overvalued:               {}\n",
            self.summary.buckets.overvalued
        ));

        if !self.sectors.is_empty() {
            output.push_str("\nSectors:\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            output.push_str(&format!(
                "{:<28} {:>10} {:>10} {:>10}\n",
                "Sector", "Avg P/E", "Avg P/B", "Count"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');

            for (sector, summary) in &self.sectors {
                output.push_str(&format!(
                    "{:<28} {:>10} {:>10} {:>10}\n",
                    sector.name(),
                    fmt_opt(summary.avg_pe),
                    fmt_opt(summary.avg_pb),
                    summary.count
                ));
            }
        }

        output.push_str(&"=".repeat(72));
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scored::tests::scored;

    fn report() -> ScreenerReport {
        let mut a = scored("A", Some(25.0), 40);
        a.record.sector = Some(GicsSector::Energy);
        let b = scored("B", None, 70);
        let mut c = scored("C", Some(12.0), 30);
        c.record.sector = Some(GicsSector::Energy);

        ScreenerReport::new("2025.02.08 09:00 KST", vec![a, b, c], &BucketThresholds::default())
    }

    #[test]
    fn test_report_sorted_and_summarized() {
        let report = report();
        let order: Vec<_> = report.stocks.iter().map(|s| s.record.ticker.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
        assert_eq!(report.summary.total_stocks, 3);
        assert_eq!(report.summary.avg_pe, Some(18.5));
        assert_eq!(report.sectors[&GicsSector::Energy].count, 2);
        assert!(report.stock("B").is_some());
        assert!(report.stock("Z").is_none());
    }

    #[test]
    fn test_report_json_layout() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["lastUpdated"], "2025.02.08 09:00 KST");
        assert_eq!(json["summary"]["undervalued"], 1);
        assert_eq!(json["stocks"][0]["ticker"], "C");
        assert_eq!(json["sectors"]["Energy"]["avgPE"], 18.5);
    }

    #[test]
    fn test_ascii_table() {
        let table = report().to_ascii_table();
        assert!(table.contains("Value Screen: 2025.02.08 09:00 KST"));
        assert!(table.contains("Energy"));
        assert!(table.contains("18.5"));
        assert!(table.contains("n/a"));
    }
}

//! End-to-end screening scenarios.

use cadiz::data::{
    GicsSector, MetricHistory, MetricHistoryPoint, PricePoint, PriceSeries, TickerInput,
    TickerRecord, UniverseSnapshot,
};
use cadiz::output::{ExportFormat, Exporter};
use cadiz::{Screener, ScreenerConfig};
use chrono::{Days, NaiveDate};
use rstest::rstest;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
}

fn record(ticker: &str, pe: Option<f64>) -> TickerRecord {
    let mut record = TickerRecord::new(ticker);
    record.metrics.trailing_pe = pe;
    record
}

/// Quarterly P/E history at a constant level.
fn flat_history(pe: f64, points: u64) -> MetricHistory {
    MetricHistory::new((0..points).map(|i| MetricHistoryPoint::new(start() + Days::new(91 * i), pe)))
}

/// Daily closes that double every 180 days.
fn doubling_prices(days: u64) -> PriceSeries {
    (0..days)
        .map(|d| PricePoint::new(start() + Days::new(d), 50.0 * 2f64.powf(d as f64 / 180.0)))
        .collect()
}

fn snapshot_json() -> String {
    let history: Vec<_> = (0..12)
        .map(|q| {
            let date = start() + Days::new(91 * q);
            format!(r#"{{ "date": "{}", "pe": {} }}"#, date.format("%Y-%m"), 15.0 + q as f64)
        })
        .collect();
    format!(
        r#"{{
            "asOf": "2023-01-06",
            "tickers": [
                {{ "ticker": "XOM", "price": 100.0, "high52w": 125.0, "pe": 20.0, "pb": 2.2,
                   "peHistory": [{}] }},
                {{ "ticker": "CVX", "price": 150.0, "high52w": 150.0, "pe": 14.0, "pb": "1.8" }},
                {{ "ticker": "NEE", "pe": "Infinity", "pb": null }},
                {{ "ticker": "DUK", "pe": 650.0 }},
                {{ "ticker": "AAPL", "pe": 31.5, "ps": 8.0, "peg": 2.2 }},
                {{ "name": "no ticker" }}
            ]
        }}"#,
        history.join(",")
    )
}

#[test]
fn test_three_ticker_rank() {
    let snapshot: UniverseSnapshot = [
        TickerInput::new(record("A", Some(10.0))),
        TickerInput::new(record("B", Some(20.0))),
        TickerInput::new(record("C", Some(30.0))),
    ]
    .into_iter()
    .collect();

    let report = Screener::default().screen(&snapshot, "t").unwrap();
    assert_eq!(report.stock("B").unwrap().pe_rank, 67);
    assert_eq!(report.stock("C").unwrap().pe_rank, 100);
}

#[test]
fn test_discount_with_neutral_ranks() {
    // No ticker has a plausible multiple, so every rank is neutral.
    let mut r = record("A", None);
    r.price = Some(70.0);
    r.metrics.high_52w = Some(100.0);
    let snapshot: UniverseSnapshot = [TickerInput::new(r)].into_iter().collect();

    let report = Screener::default().screen(&snapshot, "t").unwrap();
    let a = report.stock("A").unwrap();
    assert_eq!(a.discount_52w, Some(-30.0));
    assert_eq!((a.pe_rank, a.pb_rank, a.peg_rank, a.ps_rank), (50, 50, 50, 50));
    // 42.5 from neutral ranks + clamp(60) * 0.15
    assert_eq!(a.value_score, 52);
}

#[test]
fn test_analog_doubling() {
    let input = TickerInput::new(record("A", Some(20.0)))
        .with_pe_history(flat_history(20.0, 8))
        .with_prices(doubling_prices(4 * 365));
    let snapshot: UniverseSnapshot = [input].into_iter().collect();

    let report = Screener::default().screen(&snapshot, "t").unwrap();
    let perf = &report.stock("A").unwrap().hist_performance;

    assert_eq!(perf.similar_count, 8);
    assert_eq!(perf.win_rate, Some(100));
    assert!((perf.avg_6m_return.unwrap() - 100.0).abs() < 1e-9);
    assert!(perf.cases.iter().all(|c| (c.return_6m - 100.0).abs() < 1e-9));
    assert_eq!(perf.cases.len(), 6);
}

#[rstest]
#[case(0)]
#[case(3)]
fn test_short_history_defaults(#[case] points: u64) {
    let input = TickerInput::new(record("A", Some(20.0)))
        .with_pe_history(flat_history(20.0, points))
        .with_prices(doubling_prices(4 * 365));
    let snapshot: UniverseSnapshot = [input].into_iter().collect();

    let report = Screener::default().screen(&snapshot, "t").unwrap();
    let a = report.stock("A").unwrap();
    assert_eq!(a.pe_percentile, 50);
    assert_eq!(a.hist_performance.similar_count, 0);
    assert_eq!(a.hist_performance.avg_6m_return, None);
    assert_eq!(a.hist_performance.win_rate, None);

    let json = serde_json::to_value(a).unwrap();
    assert!(json["histPerformance"]["avg6mReturn"].is_null());
    assert!(json["histPerformance"]["winRate"].is_null());
}

#[test]
fn test_snapshot_end_to_end() {
    let snapshot = UniverseSnapshot::from_json_str(&snapshot_json()).unwrap();
    assert_eq!(snapshot.len(), 5);

    let report = Screener::default().screen(&snapshot, "2023.01.06 18:00 KST").unwrap();

    assert_eq!(report.summary.total_stocks, 5);
    assert!(report.stocks.iter().all(|s| s.value_score <= 100));
    assert!(report.stocks.iter().all(|s| s.pe_percentile <= 100));

    // Ascending P/E, absent last; DUK's implausible P/E still sorts by value.
    let order: Vec<_> = report.stocks.iter().map(|s| s.record.ticker.as_str()).collect();
    assert_eq!(order, vec!["CVX", "XOM", "AAPL", "DUK", "NEE"]);

    let xom = report.stock("XOM").unwrap();
    assert_eq!(xom.record.name, "Exxon Mobil");
    assert_eq!(xom.discount_52w, Some(-20.0));
    assert_eq!(xom.pe_rank, 67);
    assert_eq!(xom.pe_history.len(), 12);
    // History 15..=26; 20 has 6 of 12 at or below.
    assert_eq!(xom.pe_percentile, 50);

    // Implausible and missing P/E are ranked neutral.
    assert_eq!(report.stock("DUK").unwrap().pe_rank, 50);
    assert_eq!(report.stock("NEE").unwrap().pe_rank, 50);

    assert_eq!(report.summary.avg_pe, Some(21.8));

    let energy = &report.sectors[&GicsSector::Energy];
    assert_eq!(energy.count, 2);
    assert_eq!(energy.avg_pe, Some(17.0));
    assert_eq!(energy.avg_pb, Some(2.0));

    // A sector whose members have no plausible P/E reports it as absent.
    let utilities = &report.sectors[&GicsSector::Utilities];
    assert_eq!(utilities.count, 2);
    assert_eq!(utilities.avg_pe, None);
    assert_eq!(utilities.avg_pb, None);
}

#[test]
fn test_idempotent_output() {
    let snapshot = UniverseSnapshot::from_json_str(&snapshot_json()).unwrap();
    let screener = Screener::default();

    let first = screener
        .screen(&snapshot, "fixed")
        .unwrap()
        .export_to_string(ExportFormat::Json)
        .unwrap();
    let second = screener
        .screen(&snapshot, "fixed")
        .unwrap()
        .export_to_string(ExportFormat::Json)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_configured_weights() {
    let snapshot: UniverseSnapshot = [
        TickerInput::new(record("A", Some(10.0))),
        TickerInput::new(record("B", Some(30.0))),
    ]
    .into_iter()
    .collect();

    let mut config = ScreenerConfig::default();
    config.composite.weights.pe = 1.0;
    config.composite.weights.pb = 0.0;
    config.composite.weights.peg = 0.0;
    config.composite.weights.ps = 0.0;
    config.composite.weights.discount = 0.0;

    let report = Screener::new(config).screen(&snapshot, "t").unwrap();
    assert_eq!(report.stock("A").unwrap().value_score, 50);
    assert_eq!(report.stock("B").unwrap().value_score, 0);
}

#[test]
fn test_null_and_non_finite_fields_keep_tickers_ranked() {
    let snapshot = UniverseSnapshot::from_json_str(
        r#"{ "tickers": [
            { "ticker": "AAA", "pe": 10 },
            { "ticker": "BBB", "pe": 20, "peHistory": null },
            { "ticker": "CCC", "pe": 30, "prices": null },
            { "ticker": "DDD", "pe": Infinity, "pb": NaN }
        ] }"#,
    )
    .unwrap();

    let report = Screener::default().screen(&snapshot, "t").unwrap();
    assert_eq!(report.summary.total_stocks, 4);
    assert_eq!(report.stock("AAA").unwrap().pe_rank, 33);
    assert_eq!(report.stock("BBB").unwrap().pe_rank, 67);
    assert_eq!(report.stock("CCC").unwrap().pe_rank, 100);
    assert_eq!(report.stock("DDD").unwrap().pe_rank, 50);
}

#[test]
fn test_averages_agree_with_ranking_at_the_bound() {
    let mut edge = record("AAA", Some(499.996));
    edge.sector = Some(GicsSector::Energy);
    let mut cheap = record("BBB", Some(10.0));
    cheap.sector = Some(GicsSector::Energy);
    let snapshot: UniverseSnapshot = [TickerInput::new(edge), TickerInput::new(cheap)]
        .into_iter()
        .collect();

    let report = Screener::default().screen(&snapshot, "t").unwrap();
    assert_eq!(report.stock("AAA").unwrap().pe_rank, 100);
    assert_eq!(report.summary.avg_pe, Some(255.0));
    assert_eq!(report.sectors[&GicsSector::Energy].avg_pe, Some(255.0));
}

//! Cadiz CLI binary.
//!
//! Screens a universe snapshot and writes the dashboard report.

use cadiz::factors::{MetricInfo, available_metrics, get_metric_info, list_metric_names};
use cadiz::{Screener, ScreenerConfig};
use cadiz_data::UniverseSnapshot;
use cadiz_data::universe::{GicsSector, SP500Universe, Universe};
use cadiz_output::{ExportFormat, Exporter, ScreenerReport};
use chrono::Local;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cadiz")]
#[command(about = "Cadiz: S&P 500 relative value screener", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a snapshot and write the report
    Score {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format (json, pretty-json or csv)
        #[arg(long, default_value = "pretty-json")]
        format: String,

        /// Config file (defaults to the user config dir)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Score only the first N tickers
        #[arg(long)]
        limit: Option<usize>,

        /// Directory of <TICKER>.csv daily closes
        #[arg(long)]
        prices_dir: Option<PathBuf>,

        /// Value recorded as lastUpdated (defaults to local time)
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Print the universe and sector summary for a snapshot
    Summary {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Config file (defaults to the user config dir)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Describe the ranked valuation metrics
    Metrics {
        /// Show a single metric by name (pe, pb, peg, ps)
        name: Option<String>,
    },

    /// Show the built-in S&P 500 constituent list
    Universe {
        /// Filter by GICS sector
        #[arg(long)]
        sector: Option<String>,

        /// List all sectors
        #[arg(long)]
        list_sectors: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            snapshot,
            output,
            format,
            config,
            limit,
            prices_dir,
            timestamp,
        } => {
            let format: ExportFormat = format.parse()?;
            let mut config = ScreenerConfig::load(config.as_deref())?;
            if limit.is_some() {
                config.limit = limit;
            }
            let timestamp = timestamp.unwrap_or_else(default_timestamp);

            let report = screen(&snapshot, prices_dir.as_deref(), config, timestamp)?;

            match output {
                Some(path) => {
                    report.export_to_file(&path, format)?;
                    tracing::info!(path = %path.display(), stocks = report.stocks.len(), "report written");
                }
                None => println!("{}", report.export_to_string(format)?),
            }
        }
        Commands::Summary { snapshot, config } => {
            let config = ScreenerConfig::load(config.as_deref())?;
            let report = screen(&snapshot, None, config, default_timestamp())?;
            println!("{}", report.to_ascii_table());
        }
        Commands::Metrics { name } => show_metrics(name.as_deref())?,
        Commands::Universe {
            sector,
            list_sectors,
        } => {
            if list_sectors {
                list_all_sectors();
            } else {
                show_universe(sector)?;
            }
        }
    }

    Ok(())
}

fn default_timestamp() -> String {
    Local::now().format("%Y.%m.%d %H:%M").to_string()
}

fn screen(
    snapshot_path: &Path,
    prices_dir: Option<&Path>,
    config: ScreenerConfig,
    timestamp: String,
) -> Result<ScreenerReport, Box<dyn std::error::Error>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message(format!("Loading {}", snapshot_path.display()));
    let mut snapshot = match UniverseSnapshot::from_path(snapshot_path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            spinner.finish_with_message("Failed!");
            return Err(e.into());
        }
    };

    if let Some(dir) = prices_dir {
        spinner.set_message(format!("Reading prices from {}", dir.display()));
        let attached = snapshot.attach_prices_dir(dir)?;
        tracing::info!(attached, "price series attached");
    }

    spinner.set_message(format!("Scoring {} tickers", snapshot.len()));
    let report = Screener::new(config).screen(&snapshot, timestamp);

    match report {
        Ok(report) => {
            spinner.finish_with_message(format!(
                "Scored {} tickers ({} undervalued, {} overvalued)",
                report.summary.total_stocks,
                report.summary.buckets.undervalued,
                report.summary.buckets.overvalued
            ));
            Ok(report)
        }
        Err(e) => {
            spinner.finish_with_message("Failed!");
            Err(e.into())
        }
    }
}

fn show_metrics(name: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = match name {
        Some(name) => match get_metric_info(&name.to_lowercase()) {
            Some(info) => vec![info],
            None => {
                return Err(format!(
                    "Unknown metric: {} (available: {})",
                    name,
                    list_metric_names().join(", ")
                )
                .into());
            }
        },
        None => available_metrics(),
    };

    println!("Valuation Metrics:");
    println!("==================\n");
    println!("{:6} {:>18} {:>8}  Description", "Name", "Valid range", "Weight");

    for info in &metrics {
        println!("{}", format_metric(info));
    }

    Ok(())
}

fn format_metric(info: &MetricInfo) -> String {
    let (lo, hi) = info.valid_range;
    format!(
        "{:6} {:>18} {:>8.2}  {}",
        info.name,
        format!("({lo}, {hi})"),
        info.default_weight,
        info.description
    )
}

fn show_universe(sector_filter: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let universe = SP500Universe::new();

    println!("S&P 500 Universe");
    println!("================\n");

    if let Some(sector_name) = sector_filter {
        let sector: GicsSector = sector_name.parse()?;
        let symbols = universe.symbols_in_sector(sector);

        println!("Sector: {}", sector);
        println!("Constituents: {}\n", symbols.len());

        for symbol in symbols {
            let name = universe.name(&symbol).unwrap_or_default();
            println!("  {:6} {}", symbol, name);
        }
    } else {
        let sector_counts = universe.sector_counts();

        println!("Total constituents: {}\n", universe.size());
        println!("Breakdown by sector:");

        for sector in GicsSector::all() {
            let count = sector_counts.get(&sector).unwrap_or(&0);
            println!("  {:30} {:3} stocks", sector.name(), count);
        }
    }

    Ok(())
}

fn list_all_sectors() {
    println!("GICS Sectors:");
    println!("=============\n");

    for sector in GicsSector::all() {
        println!("{:2} - {}", sector.code(), sector.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_metrics() {
        let cli = Cli::try_parse_from(["cadiz", "metrics", "peg"]).unwrap();
        assert!(matches!(cli.command, Commands::Metrics { name: Some(ref n) } if n == "peg"));
        assert!(show_metrics(Some("PE")).is_ok());
        assert!(show_metrics(None).is_ok());
        assert!(show_metrics(Some("ev_ebitda")).is_err());
    }

    #[test]
    fn test_format_metric() {
        let line = format_metric(&get_metric_info("pe").unwrap());
        assert!(line.starts_with("pe"));
        assert!(line.contains("(0, 500)"));
        assert!(line.contains("0.30"));
    }

    #[test]
    fn test_parse_score() {
        let cli = Cli::try_parse_from([
            "cadiz",
            "score",
            "snap.json",
            "--format",
            "csv",
            "--limit",
            "10",
            "--prices-dir",
            "prices",
        ])
        .unwrap();

        match cli.command {
            Commands::Score {
                snapshot,
                format,
                limit,
                prices_dir,
                output,
                ..
            } => {
                assert_eq!(snapshot, PathBuf::from("snap.json"));
                assert_eq!(format.parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
                assert_eq!(limit, Some(10));
                assert_eq!(prices_dir, Some(PathBuf::from("prices")));
                assert!(output.is_none());
            }
            _ => panic!("expected score"),
        }
    }
}

// In app/src/main.rs

use analytics::AnalyticsEngine;
use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use core_types::{PositionState, Signal};
use data_client::DataClient;
use strategy::{AnnotatedSeries, CrossoverEngine, CrossoverSettings};
use tracing_subscriber::prelude::*;

/// Number of rows of the annotated series shown in the result table.
const TAIL_ROWS: usize = 5;
/// Default lookback when no start date is given, roughly two months.
const DEFAULT_LOOKBACK_DAYS: u64 = 60;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A moving-average crossover backtester for daily equity data.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a moving-average crossover backtest for a symbol.
    Backtest {
        /// The ticker symbol to backtest (e.g., "RELIANCE.NS").
        #[arg(short, long)]
        symbol: String,

        /// The start date in YYYY-MM-DD format. Defaults to 60 days ago.
        #[arg(long)]
        start_date: Option<String>,

        /// The end date in YYYY-MM-DD format. Defaults to today.
        #[arg(long)]
        end_date: Option<String>,

        /// Override for the short moving-average window.
        #[arg(long)]
        short_window: Option<usize>,

        /// Override for the long moving-average window.
        #[arg(long)]
        long_window: Option<usize>,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let settings = app_config::load_settings()?;

    let level: tracing::Level = settings
        .app
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    match cli.command {
        Commands::Backtest {
            symbol,
            start_date,
            end_date,
            short_window,
            long_window,
        } => {
            handle_backtest(settings, symbol, start_date, end_date, short_window, long_window)
                .await?;
        }
    }

    Ok(())
}

/// Handles the logic for the `backtest` subcommand.
async fn handle_backtest(
    settings: app_config::Settings,
    symbol: String,
    start_date: Option<String>,
    end_date: Option<String>,
    short_window: Option<usize>,
    long_window: Option<usize>,
) -> Result<()> {
    // --- 1. Resolve & Validate Inputs ---
    let today = Utc::now().date_naive();
    let end = match end_date {
        Some(date) => parse_date(&date)?,
        None => today,
    };
    let start = match start_date {
        Some(date) => parse_date(&date)?,
        None => end - Days::new(DEFAULT_LOOKBACK_DAYS),
    };
    if start >= end {
        anyhow::bail!("Start date must be before end date.");
    }

    let crossover_settings = CrossoverSettings {
        short_window: short_window.unwrap_or(settings.strategy.short_window),
        long_window: long_window.unwrap_or(settings.strategy.long_window),
    };
    // Reject a misordered window pair before the engine ever runs.
    crossover_settings.validate()?;

    // --- 2. Fetch the Price History ---
    tracing::info!(symbol, %start, %end, "Downloading daily price history.");
    let client = DataClient::new(&settings.data);
    let series = client.get_daily_history(&symbol, start, end).await?;
    series
        .ensure_non_empty()
        .context("No data returned for the selected period.")?;
    tracing::info!("Loaded {} daily bars.", series.len());

    // --- 3. Run the Strategy and Aggregate ---
    let annotated = CrossoverEngine::new().annotate(&series, &crossover_settings);
    let report = AnalyticsEngine::new().calculate(&annotated);

    // --- 4. Render the Results ---
    print_backtest_report(&symbol, &crossover_settings, &annotated, &report);

    Ok(())
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date, e))
}

/// Helper function to print the final backtest summary.
fn print_backtest_report(
    symbol: &str,
    settings: &CrossoverSettings,
    annotated: &AnnotatedSeries,
    report: &analytics::PerformanceReport,
) {
    println!("\n--- Backtest Results: {} ---", symbol);
    println!(
        "SMA windows: short = {}, long = {}",
        settings.short_window, settings.long_window
    );
    println!("--------------------------------------------------------------------------");
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>7} {:>9} {:>11}",
        "date", "close", "sma_short", "sma_long", "signal", "position", "return"
    );

    let tail_start = annotated.len().saturating_sub(TAIL_ROWS);
    for point in &annotated.points()[tail_start..] {
        println!(
            "{:<12} {:>10.2} {:>10} {:>10} {:>7} {:>9} {:>10.4}%",
            point.date,
            point.close,
            format_sma(point.sma_short),
            format_sma(point.sma_long),
            format_signal(point.signal),
            format_position(point.position),
            point.strategy_return * 100.0
        );
    }

    println!("--------------------------------------------------------------------------");
    println!("Buy and Hold Return: {:.2}%", report.buy_and_hold_return * 100.0);
    println!("Strategy Return:     {:.2}%", report.strategy_return * 100.0);
}

fn format_sma(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn format_signal(signal: Signal) -> &'static str {
    match signal {
        Signal::Buy => "BUY",
        Signal::Sell => "SELL",
        Signal::Hold => "-",
    }
}

fn format_position(position: PositionState) -> &'static str {
    match position {
        PositionState::Long => "LONG",
        PositionState::Flat => "FLAT",
    }
}

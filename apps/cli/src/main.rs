//! NSE quote snapshot downloader CLI.
//!
//! # Usage
//!
//! ```bash
//! # Fetch a few symbols, write nse-quotes-<timestamp>.csv
//! nsedl RELIANCE TCS INFY
//!
//! # Comma-separated and mixed case work too
//! nsedl "reliance,tcs" -o quotes.csv
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nsedl_market_data::{FetchConfig, NseQuoteService, QuoteRow};

mod export;

#[derive(Parser)]
#[command(name = "nsedl")]
#[command(about = "Download NSE India equity quote snapshots", long_about = None)]
#[command(version)]
struct Cli {
    /// Ticker symbols, comma or space separated (e.g. RELIANCE,TCS INFY)
    #[arg(required = true)]
    symbols: Vec<String>,

    /// Output CSV path (default: nse-quotes-<timestamp>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let symbols = parse_symbols(&cli.symbols);
    anyhow::ensure!(!symbols.is_empty(), "no usable symbols in the input");

    println!("Fetching {} symbols: {}", symbols.len(), symbols.join(", "));

    let bar = ProgressBar::new(symbols.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .unwrap(),
    );

    info!("priming NSE session");
    let mut service = NseQuoteService::connect(FetchConfig::new())
        .await
        .context("Failed to create NSE session")?;

    let summary = service
        .run(&symbols, |progress| {
            bar.set_position(progress.completed as u64);
            bar.set_message(format!(
                "{} {}",
                progress.symbol,
                if progress.ok { "ok" } else { "skipped" }
            ));
        })
        .await?;
    bar.finish_and_clear();

    print_preview(&summary.rows);
    if !summary.skipped.is_empty() {
        println!("Skipped (no data): {}", summary.skipped.join(", "));
    }

    let output = cli.output.unwrap_or_else(default_output_path);
    export::write_csv(&output, &summary.rows)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Fetched {} of {} symbols ({} skipped), saved to {}",
        summary.rows.len(),
        symbols.len(),
        summary.skipped.len(),
        output.display()
    );

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Split free-text symbol input into trimmed uppercase tickers.
///
/// Duplicates survive and input order is kept.
fn parse_symbols(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|chunk| chunk.split(|c: char| c == ',' || c.is_whitespace()))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_uppercase)
        .collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "nse-quotes-{}.csv",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ))
}

fn print_preview(rows: &[QuoteRow]) {
    println!(
        "{:<14} {:>12} {:>10} {:>9} {:>14}",
        "SYMBOL", "LAST", "CHANGE", "%CHG", "VOLUME"
    );
    for row in rows {
        println!(
            "{:<14} {:>12.2} {:>10.2} {:>9.2} {:>14}",
            row.symbol, row.last_price, row.change, row.pct_change, row.traded_volume
        );
    }
}

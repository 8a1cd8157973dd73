use crate::error::Result;
use crate::fetch::Fetcher;
use crate::types::RunSummary;
use crate::{pipeline, report, source};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mailsift",
    version,
    about = "Collect email addresses from a list of web pages"
)]
pub struct Cli {
    /// Text file with one URL per line
    input: PathBuf,

    /// Where to write extracted addresses
    #[arg(long, default_value = "collected_emails.csv")]
    output: PathBuf,

    /// Where to write URLs that failed to fetch
    #[arg(long, default_value = "rejected_urls.csv")]
    rejected: PathBuf,

    /// Cap on concurrent requests (default: all URLs at once)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

/// Run the whole batch: load, fetch+extract, write tables, print a summary.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let started_at = Utc::now();
    let start = Instant::now();

    let urls = source::load_urls(&cli.input)?;
    let url_count = urls.len();

    let fetcher = Fetcher::with_timeout(Duration::from_secs(cli.timeout_secs))?;
    let results = pipeline::run(urls, &fetcher, cli.concurrency).await;

    let output = if results.extracted.is_empty() {
        info!("No data collected.");
        None
    } else {
        report::write_extractions(&results.extracted, &cli.output)?;
        info!("Data saved to {}", cli.output.display());
        Some(cli.output.display().to_string())
    };

    let rejected_output = if results.rejected.is_empty() {
        info!("No URLs were rejected.");
        None
    } else {
        report::write_rejections(&results.rejected, &cli.rejected)?;
        info!("Rejected URLs saved to {}", cli.rejected.display());
        Some(cli.rejected.display().to_string())
    };

    info!("Complete.");

    print_json(&RunSummary {
        started_at,
        duration_ms: start.elapsed().as_millis() as u64,
        urls_loaded: url_count,
        extracted: results.extracted.len(),
        rejected: results.rejected.len(),
        output,
        rejected_output,
    });
    Ok(())
}

fn print_json<T: serde::Serialize>(val: &T) {
    // pretty JSON output
    println!(
        "{}",
        serde_json::to_string_pretty(val).expect("summary serializes")
    );
}

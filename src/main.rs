// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG, default "info")
// 2. Parse command-line arguments using clap
// 3. Build and validate the crawl configuration
// 4. Crawl the site
// 5. Save the sorted URL list and print a summary (or the JSON report)
// 6. Exit with proper code (0 = crawl completed, 2 = error)
//
// A crawl that finds zero pages still exits 0. Only a bad configuration or a
// failed write is an error.
// =============================================================================

mod canonical; // src/canonical.rs - URL canonicalization rules
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated crawl configuration
mod crawl; // src/crawl/ - traversal engine
mod fetch; // src/fetch/ - HTTP client
mod links; // src/links/ - link extraction and filtering
mod output; // src/output.rs - writing the URL list

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CrawlConfig;
use crawl::CrawlReport;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for --json and "-" output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl completed and the list was written
//   Err   = invalid configuration or the list could not be written
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = CrawlConfig::new(&cli.start_url, &cli.extra_paths())
        .context("Invalid configuration")?
        .with_delay(cli.delay())
        .with_timeout(cli.timeout())
        .with_user_agent(cli.user_agent.clone());

    tracing::info!("START_URL: {}", config.start_url);
    tracing::info!("OUTPUT_FILE: {}", cli.output);

    let report = crawl::crawl_site(config).await?;

    output::save_urls_or_dump(&report.found, &cli.output, std::io::stdout().lock())?;

    // With "-" stdout already holds the URL list, so JSON goes to stderr
    let report_to_stderr = cli.output == output::STDOUT_DESTINATION;
    print_report(&report, cli.json, report_to_stderr)?;

    Ok(0)
}

// Prints the report either as a summary or JSON
fn print_report(report: &CrawlReport, json: bool, to_stderr: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        if to_stderr {
            eprintln!("{}", json_output);
        } else {
            println!("{}", json_output);
        }
        return Ok(());
    }

    if report.is_empty() {
        tracing::warn!("No pages could be fetched under {}", report.start_url);
    }

    eprintln!();
    eprintln!("📊 Summary:");
    eprintln!("   ✅ Found: {}", report.found.len());
    eprintln!("   ❌ Failed: {}", report.failures.len());
    eprintln!("   🌐 Requests: {}", report.requests);
    eprintln!("   ⏱️  Duration: {:.2}s", report.duration_ms as f64 / 1000.0);
    Ok(())
}

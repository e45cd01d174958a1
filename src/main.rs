// src/main.rs
// =============================================================================
// Entry point of the job-scraper CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so --json output on stdout stays clean)
// 3. Run the scrape: page count -> every page -> CSV
// 4. Print the summary and exit with the proper code
//    (0 = success, 1 = some pages failed under --allow-partial, 2 = error)
// =============================================================================

mod cli;
mod config;
mod error;
mod output;
mod pipeline;
mod scrape;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns the process exit code, or an error for anything fatal
async fn run(cli: &Cli) -> Result<i32> {
    let config = cli.to_config();

    let report = pipeline::run(&config)
        .await
        .with_context(|| format!("scraping \"{}\" failed", config.query))?;

    output::print_report(&report, cli.json).context("could not print the summary")?;

    Ok(report.exit_code())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "job_scraper=debug,info"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
// Every flag has a default, so running the binary with no arguments scrapes
// the "python" search on kr.indeed.com into ./jobs.csv.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::config::{
    FailurePolicy, SearchConfig, DEFAULT_CARD_CONCURRENCY, DEFAULT_DETAIL_PREFIX,
    DEFAULT_ENDPOINT, DEFAULT_OUTPUT, DEFAULT_PAGE_CONCURRENCY, DEFAULT_PAGE_SIZE, DEFAULT_QUERY,
};

#[derive(Parser, Debug)]
#[command(
    name = "job-scraper",
    version,
    about = "Scrape paginated job search results into a CSV file",
    long_about = "job-scraper counts the result pages of a job search, fetches every page \
                  concurrently, extracts each listing card and writes them all to a CSV file."
)]
pub struct Cli {
    /// Search term
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Search endpoint (the query and paging parameters are appended)
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Listings requested per page; also the offset step between pages
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Prefix that turns a listing id into its detail page link
    #[arg(long, default_value = DEFAULT_DETAIL_PREFIX)]
    pub detail_prefix: String,

    /// Output CSV path (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum number of pages fetched at once
    #[arg(long, default_value_t = DEFAULT_PAGE_CONCURRENCY)]
    pub page_concurrency: usize,

    /// Maximum number of listing cards extracted at once (per page)
    #[arg(long, default_value_t = DEFAULT_CARD_CONCURRENCY)]
    pub card_concurrency: usize,

    /// Keep going when a page fails: write what worked and report the rest
    #[arg(long)]
    pub allow_partial: bool,

    /// Crawl the first page even when no pagination links are found
    #[arg(long)]
    pub assume_first_page: bool,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            endpoint: self.endpoint.clone(),
            query: self.query.clone(),
            page_size: self.page_size,
            detail_url_prefix: self.detail_prefix.clone(),
            output: self.output.clone(),
            page_concurrency: self.page_concurrency,
            card_concurrency: self.card_concurrency,
            failure_policy: if self.allow_partial {
                FailurePolicy::Partial
            } else {
                FailurePolicy::Abort
            },
            assume_first_page: self.assume_first_page,
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..SearchConfig::default()
        }
    }
}

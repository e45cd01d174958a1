// src/config.rs
// =============================================================================
// Search configuration.
//
// Everything the scraper needs to know about *what* to scrape lives in one
// SearchConfig value that gets passed down into the orchestrator:
// - which endpoint and search term to query
// - how many listings per page (the offset step)
// - where detail pages live (for the Link column)
// - where to write the CSV
// - how much work may be in flight at once
//
// The defaults reproduce the Korean Indeed "python" search.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{Result, ScrapeError};

pub const DEFAULT_ENDPOINT: &str = "https://kr.indeed.com/jobs";
pub const DEFAULT_QUERY: &str = "python";
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const DEFAULT_DETAIL_PREFIX: &str = "https://kr.indeed.com/viewjob?jk=";
pub const DEFAULT_OUTPUT: &str = "jobs.csv";
pub const DEFAULT_PAGE_CONCURRENCY: usize = 8;
pub const DEFAULT_CARD_CONCURRENCY: usize = 16;
pub const MAX_PAGE_SIZE: usize = 1000;

const USER_AGENT: &str = concat!("job-scraper/", env!("CARGO_PKG_VERSION"));

/// What to do when some pages fail while others succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failed page and write nothing
    Abort,
    /// Keep the pages that worked, write them, and report the rest
    Partial,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: Url,
    pub query: String,
    pub page_size: usize,
    pub detail_url_prefix: String,
    pub output: PathBuf,
    pub page_concurrency: usize,
    pub card_concurrency: usize,
    pub failure_policy: FailurePolicy,
    /// Crawl the first page even when the pager shows no links
    pub assume_first_page: bool,
    /// Per-request timeout; None waits forever
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            // Constant, known-good URL
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            query: DEFAULT_QUERY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            detail_url_prefix: DEFAULT_DETAIL_PREFIX.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            page_concurrency: DEFAULT_PAGE_CONCURRENCY,
            card_concurrency: DEFAULT_CARD_CONCURRENCY,
            failure_policy: FailurePolicy::Abort,
            assume_first_page: false,
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Checks the numeric settings that would otherwise hang or loop
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ScrapeError::Config(
                "page size must be greater than zero".to_string(),
            ));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ScrapeError::Config(format!(
                "page size must be at most {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.page_concurrency == 0 || self.card_concurrency == 0 {
            return Err(ScrapeError::Config(
                "concurrency limits must be greater than zero".to_string(),
            ));
        }
        if !matches!(self.endpoint.scheme(), "http" | "https") {
            return Err(ScrapeError::Config(format!(
                "endpoint must be http or https: {}",
                self.endpoint
            )));
        }
        Ok(())
    }

    // The base search URL: endpoint + search term + page size
    //
    // Example:
    //   https://kr.indeed.com/jobs?q=python&limit=50
    pub fn search_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &self.query)
            .append_pair("limit", &self.page_size.to_string());
        url
    }

    // URL of one zero-based results page
    //
    // The site pages by offset, so page 2 (index 1) starts at 1 × page_size:
    //   https://kr.indeed.com/jobs?q=python&limit=50&start=50
    pub fn page_url(&self, index: usize) -> Result<Url> {
        let offset = index.checked_mul(self.page_size).ok_or_else(|| {
            ScrapeError::Config(format!(
                "offset of page {} overflows with page size {}",
                index, self.page_size
            ))
        })?;

        let mut url = self.search_url();
        url.query_pairs_mut()
            .append_pair("start", &offset.to_string());
        Ok(url)
    }

    /// One shared client for every request in the run (connection pooling)
    pub fn http_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| ScrapeError::Config(format!("could not build HTTP client: {}", e)))
    }
}

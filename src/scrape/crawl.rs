// src/scrape/crawl.rs
// =============================================================================
// The orchestrator: resolve the page count, scrape every page, merge.
//
// How it works:
// 1. Fetch the base search URL and count the pager links
// 2. Decide how many pages to crawl (see plan_pages)
// 3. Fetch pages concurrently, at most `page_concurrency` at a time
// 4. Either stop at the first failed page (Abort) or keep going and
//    collect the failures (Partial)
// 5. Sort pages by index so the merged listings come out in a stable order:
//    page index first, then position on the page
//
// Under Abort, returning early from try_collect drops the stream, which
// drops (cancels) every fetch still in flight.
// =============================================================================

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::listing::ListingRecord;
use super::page::{fetch_page, PageFailure, PageResult};
use super::pagination::resolve_page_count;
use super::selectors::PageSelectors;
use crate::config::{FailurePolicy, SearchConfig};
use crate::error::{Result, ScrapeError};

/// Everything a crawl produced
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Pages the crawl set out to fetch
    pub pages_planned: usize,
    /// Successfully scraped pages, sorted by index
    pub pages: Vec<PageResult>,
    /// Pages that failed (only ever non-empty under FailurePolicy::Partial)
    pub failures: Vec<PageFailure>,
}

impl CrawlOutcome {
    pub fn listing_count(&self) -> usize {
        self.pages.iter().map(|page| page.listings.len()).sum()
    }

    /// All listings, by page index then position on the page
    pub fn listings(&self) -> impl Iterator<Item = &ListingRecord> {
        self.pages.iter().flat_map(|page| page.listings.iter())
    }
}

// Runs a whole crawl: page count, then every page
pub async fn crawl(client: &Client, config: &SearchConfig) -> Result<CrawlOutcome> {
    let selectors = PageSelectors::new();

    let pagination_links = resolve_page_count(client, config, &selectors).await?;
    let total_pages = plan_pages(pagination_links, config);

    crawl_pages(client, config, &selectors, total_pages).await
}

// Turns the pager link count into the number of pages to fetch.
//
// A page without a pager is ambiguous: either there are no results or
// everything fit on one page. We only crawl that first page when the
// caller opted in with `assume_first_page`.
pub fn plan_pages(pagination_links: usize, config: &SearchConfig) -> usize {
    if pagination_links > 0 {
        return pagination_links;
    }

    if config.assume_first_page {
        warn!("no pagination links found; assuming a single page of results");
        1
    } else {
        warn!("no pagination links found; nothing to crawl (use --assume-first-page to crawl the first page anyway)");
        0
    }
}

// Fetches pages 0..total_pages and merges them
pub async fn crawl_pages(
    client: &Client,
    config: &SearchConfig,
    selectors: &PageSelectors,
    total_pages: usize,
) -> Result<CrawlOutcome> {
    info!(
        pages = total_pages,
        concurrency = config.page_concurrency,
        "crawling result pages"
    );

    let fetches = stream::iter(0..total_pages)
        .map(|index| fetch_page(client, config, selectors, index))
        .buffer_unordered(config.page_concurrency);

    let (mut pages, mut failures) = match config.failure_policy {
        FailurePolicy::Abort => {
            let pages: Vec<PageResult> = fetches
                .try_collect()
                .await
                .map_err(|failure| ScrapeError::Page(Box::new(failure)))?;
            (pages, Vec::new())
        }
        FailurePolicy::Partial => {
            let mut pages = Vec::new();
            let mut failures = Vec::new();
            let results: Vec<_> = fetches.collect().await;
            for result in results {
                match result {
                    Ok(page) => pages.push(page),
                    Err(failure) => {
                        warn!(page = failure.index, error = %failure.error, "page failed, continuing");
                        failures.push(failure);
                    }
                }
            }
            (pages, failures)
        }
    };

    pages.sort_by_key(|page| page.index);
    failures.sort_by_key(|failure| failure.index);

    for page in &pages {
        debug!(page = page.index, url = %page.url, listings = page.listings.len(), "merged page");
    }

    let outcome = CrawlOutcome {
        pages_planned: total_pages,
        pages,
        failures,
    };
    info!(
        pages = outcome.pages.len(),
        failed = outcome.failures.len(),
        listings = outcome.listing_count(),
        "crawl finished"
    );
    Ok(outcome)
}

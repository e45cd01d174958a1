// src/scrape/mod.rs
// =============================================================================
// This module scrapes job listings from paginated search results.
//
// Submodules:
// - normalize: whitespace cleanup for extracted text
// - selectors: CSS selectors for the results markup
// - listing: one listing card -> one ListingRecord
// - page: one results page -> a list of records
// - pagination: how many pages the search has
// - crawl: ties it all together with bounded concurrency
// =============================================================================

mod crawl;
mod listing;
mod normalize;
mod page;
mod pagination;
mod selectors;

#[cfg(test)]
pub(crate) mod testing;

pub use crawl::{crawl, CrawlOutcome};
pub use listing::ListingRecord;
pub use page::PageFailure;

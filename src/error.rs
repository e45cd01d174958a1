// src/error.rs
// =============================================================================
// Error types for the scrape pipeline.
//
// Every failure the scraper can hit falls into one of a few kinds:
// - Network/transport errors (DNS, connection refused, timeouts)
// - Non-success HTTP status codes
// - File system errors while writing the output file
// - Worker tasks that panicked or were cancelled
// - A whole results page failing (wraps one of the above with the page index)
// - Invalid configuration (bad endpoint, zero page size, ...)
//
// Missing HTML elements are NOT errors. They become empty fields instead.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[source]: keeps the underlying error so callers can walk the chain
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::scrape::PageFailure;

/// Everything that can go wrong while scraping and writing results.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request never produced a response (DNS, connect, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 OK
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },

    /// Creating or writing the output file failed
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited-text writer rejected a row
    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),

    /// A page or card worker panicked or was cancelled
    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A results page could not be scraped (names the page)
    #[error(transparent)]
    Page(Box<PageFailure>),

    /// The search configuration cannot be used
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Shorthand used across the scrape modules.
pub type Result<T> = std::result::Result<T, ScrapeError>;

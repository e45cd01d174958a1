// src/output/summary.rs
// =============================================================================
// The end-of-run summary: how many pages and listings, which pages failed,
// where the CSV went. Printed as a small table or, with --json, as JSON.
// =============================================================================

use serde::Serialize;

use crate::config::SearchConfig;
use crate::scrape::CrawlOutcome;

/// A page that was skipped under the partial-results policy
#[derive(Debug, Clone, Serialize)]
pub struct FailedPage {
    pub index: usize,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub query: String,
    pub pages_planned: usize,
    pub pages_fetched: usize,
    pub listings: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_pages: Vec<FailedPage>,
    pub output: String,
}

impl CrawlReport {
    pub fn new(config: &SearchConfig, outcome: &CrawlOutcome, rows_written: usize) -> Self {
        Self {
            query: config.query.clone(),
            pages_planned: outcome.pages_planned,
            pages_fetched: outcome.pages.len(),
            listings: rows_written,
            failed_pages: outcome
                .failures
                .iter()
                .map(|failure| FailedPage {
                    index: failure.index,
                    url: failure.url.clone(),
                    reason: failure.error.to_string(),
                })
                .collect(),
            output: config.output.display().to_string(),
        }
    }

    /// True when every planned page made it into the output
    pub fn is_complete(&self) -> bool {
        self.failed_pages.is_empty()
    }

    // Process exit code:
    //   0 = every page scraped
    //   1 = output written, but some pages failed
    pub fn exit_code(&self) -> i32 {
        if self.is_complete() {
            0
        } else {
            1
        }
    }
}

// Prints the report either as pretty JSON or as a short human summary
pub fn print_report(report: &CrawlReport, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_summary(report);
    }
    Ok(())
}

fn print_summary(report: &CrawlReport) {
    println!();
    println!("📊 Summary for \"{}\":", report.query);
    println!("   📄 Pages: {}/{}", report.pages_fetched, report.pages_planned);
    println!("   💼 Listings: {}", report.listings);
    println!("   💾 Output: {}", report.output);

    if !report.failed_pages.is_empty() {
        println!("   ❌ Failed pages:");
        for page in &report.failed_pages {
            println!("      #{} {} ({})", page.index, page.url, page.reason);
        }
    }

    println!();
    println!("✅ Done, extracted {} jobs", report.listings);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(failed_pages: Vec<FailedPage>) -> CrawlReport {
        CrawlReport {
            query: "python".to_string(),
            pages_planned: 3,
            pages_fetched: 3 - failed_pages.len(),
            listings: 42,
            failed_pages,
            output: "jobs.csv".to_string(),
        }
    }

    #[test]
    fn test_complete_run_exits_zero() {
        let report = report(Vec::new());
        assert!(report.is_complete());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_failed_pages_exit_one() {
        let report = report(vec![FailedPage {
            index: 1,
            url: "https://kr.indeed.com/jobs?q=python&limit=50&start=50".to_string(),
            reason: "HTTP 503".to_string(),
        }]);
        assert!(!report.is_complete());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_json_omits_empty_failures() {
        let value = serde_json::to_value(report(Vec::new())).unwrap();
        assert_eq!(value["listings"], 42);
        assert_eq!(value["pages_planned"], 3);
        assert!(value.get("failed_pages").is_none());
    }
}

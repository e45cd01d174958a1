// src/pipeline.rs
// =============================================================================
// One complete run: validate config, crawl, write the CSV, build the report.
//
// The CSV is only written after the crawl returns. Under the Abort policy a
// failed request means crawl() returns an error, so no file gets created.
// =============================================================================

use tracing::info;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::output::{write_listings_file, CrawlReport};
use crate::scrape::crawl;

pub async fn run(config: &SearchConfig) -> Result<CrawlReport> {
    config.validate()?;
    let client = config.http_client()?;

    info!(
        query = %config.query,
        endpoint = %config.endpoint,
        output = %config.output.display(),
        "starting scrape"
    );

    let outcome = crawl(&client, config).await?;
    let rows = write_listings_file(&config.output, outcome.listings(), &config.detail_url_prefix)?;

    Ok(CrawlReport::new(config, &outcome, rows))
}

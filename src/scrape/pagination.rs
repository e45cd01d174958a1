// src/scrape/pagination.rs
// Works out how many result pages a search has by counting the links in the
// pager on the first page.

use reqwest::Client;
use scraper::Html;
use tracing::debug;

use super::page::fetch_html;
use super::selectors::PageSelectors;
use crate::config::SearchConfig;
use crate::error::Result;

// Fetches the base search URL and counts its pagination links.
//
// No pager at all gives 0. That can mean "no results" or "one page of
// results with no pager shown"; the caller decides which (see
// SearchConfig::assume_first_page).
pub async fn resolve_page_count(
    client: &Client,
    config: &SearchConfig,
    selectors: &PageSelectors,
) -> Result<usize> {
    let url = config.search_url().to_string();
    let html = fetch_html(client, &url).await?;
    let count = count_pagination_links(&html, selectors);

    debug!(url = %url, pagination_links = count, "resolved page count");
    Ok(count)
}

// Number of links inside the pagination control. When the markup has more
// than one pager, the last one wins.
pub fn count_pagination_links(html: &str, selectors: &PageSelectors) -> usize {
    let document = Html::parse_document(html);
    let count = document
        .select(&selectors.pagination)
        .last()
        .map(|pager| pager.select(&selectors.pagination_link).count())
        .unwrap_or(0);
    count
}

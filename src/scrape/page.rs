// src/scrape/page.rs
// =============================================================================
// Fetches one page of search results and extracts every listing card on it.
//
// How it works:
// 1. Build the page URL (search URL + start=index × page_size)
// 2. GET it; anything other than 200 OK is a failure for this page
// 3. Parse the HTML and copy each card's id and raw field text out
// 4. Clean the cards up on blocking worker tasks, at most
//    `card_concurrency` at a time
// 5. Put the records back into document order
//
// Rust concepts:
// - scraper::Html is not Send, so it never lives across an .await; cards
//   leave the document as owned RawCard values
// - spawn_blocking: runs the per-card work off the async worker threads
// =============================================================================

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use scraper::Html;
use thiserror::Error;
use tracing::debug;

use super::listing::{read_card, ListingRecord, RawCard};
use super::selectors::PageSelectors;
use crate::config::SearchConfig;
use crate::error::{Result, ScrapeError};

/// Listings from one results page, in document order
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Zero-based page index
    pub index: usize,
    pub url: String,
    pub listings: Vec<ListingRecord>,
}

/// A page that could not be scraped
#[derive(Debug, Error)]
#[error("page {index} ({url}) failed: {error}")]
pub struct PageFailure {
    pub index: usize,
    pub url: String,
    #[source]
    pub error: ScrapeError,
}

// GETs a URL and returns the body, treating any non-200 status as an error
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    debug!(url, "requesting");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })?;

    if response.status() != StatusCode::OK {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Transport {
        url: url.to_string(),
        source,
    })
}

// Scrapes one results page
//
// Parameters:
//   client: shared HTTP client
//   config: search configuration (page size, card concurrency)
//   selectors: shared selectors
//   index: zero-based page index
//
// Returns: the page's listings, or a PageFailure naming the page
pub async fn fetch_page(
    client: &Client,
    config: &SearchConfig,
    selectors: &PageSelectors,
    index: usize,
) -> std::result::Result<PageResult, PageFailure> {
    let url = match config.page_url(index) {
        Ok(url) => url.to_string(),
        Err(error) => {
            return Err(PageFailure {
                index,
                url: config.search_url().to_string(),
                error,
            })
        }
    };

    match scrape_page(client, config, selectors, &url).await {
        Ok(listings) => Ok(PageResult {
            index,
            url,
            listings,
        }),
        Err(error) => Err(PageFailure { index, url, error }),
    }
}

async fn scrape_page(
    client: &Client,
    config: &SearchConfig,
    selectors: &PageSelectors,
    url: &str,
) -> Result<Vec<ListingRecord>> {
    let html = fetch_html(client, url).await?;
    let cards = read_cards(&html, selectors);

    let mut extracted: Vec<(usize, ListingRecord)> = stream::iter(cards.into_iter().enumerate())
        .map(|(position, card)| tokio::task::spawn_blocking(move || (position, card.into_record())))
        .buffer_unordered(config.card_concurrency)
        .try_collect()
        .await?;

    // Workers finish in any order; put the cards back where they were on the page
    extracted.sort_by_key(|(position, _)| *position);

    Ok(extracted.into_iter().map(|(_, record)| record).collect())
}

// Id and raw field text of every listing card on a results page, in
// document order
pub fn read_cards(html: &str, selectors: &PageSelectors) -> Vec<RawCard> {
    let document = Html::parse_document(html);
    let cards = document
        .select(&selectors.card)
        .map(|card| read_card(card, selectors))
        .collect();
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::testing::{results_page, test_config};
    use mockito::Matcher;

    #[test]
    fn test_read_cards_in_document_order() {
        let selectors = PageSelectors::new();
        let html = results_page(0, &[("a", "First"), ("b", "Second"), ("c", "Third")]);
        let cards = read_cards(&html, &selectors);

        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(cards[1].title.contains("Second"));
    }

    #[test]
    fn test_page_without_cards() {
        let selectors = PageSelectors::new();
        assert!(read_cards("<html><body>No results</body></html>", &selectors).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_keeps_ids_of_table_row_cards() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/jobs")
            .match_query(Matcher::UrlEncoded("start".into(), "0".into()))
            .with_status(200)
            .with_body(
                r#"<html><body><table>
                    <tr class="jobsearch-SerpJobCard" data-jk="row1">
                        <td><h2 class="title"><a>Row   Job</a></h2></td>
                        <td class="salaryText"> 3,000만원 </td>
                    </tr>
                    <tr class="jobsearch-SerpJobCard" data-jk="row2"><td></td></tr>
                </table></body></html>"#,
            )
            .create_async()
            .await;

        let config = test_config(&server);
        let page = fetch_page(&Client::new(), &config, &PageSelectors::new(), 0)
            .await
            .unwrap();

        let ids: Vec<_> = page.listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["row1", "row2"]);
        assert_eq!(page.listings[0].title, "Row Job");
        assert_eq!(page.listings[0].salary, "3,000만원");
    }

    #[tokio::test]
    async fn test_fetch_page_offset_overflow_is_a_page_failure() {
        let server = mockito::Server::new_async().await;
        let config = SearchConfig {
            page_size: 1000,
            ..test_config(&server)
        };

        let failure = fetch_page(&Client::new(), &config, &PageSelectors::new(), usize::MAX)
            .await
            .unwrap_err();

        assert_eq!(failure.index, usize::MAX);
        assert!(matches!(failure.error, ScrapeError::Config(_)));
    }

    #[tokio::test]
    async fn test_fetch_page_extracts_all_cards_in_order() {
        let mut server = mockito::Server::new_async().await;
        let cards: Vec<(String, String)> = (0..7)
            .map(|n| (format!("id{}", n), format!("Job {}", n)))
            .collect();
        let card_refs: Vec<(&str, &str)> = cards
            .iter()
            .map(|(id, title)| (id.as_str(), title.as_str()))
            .collect();
        let mock = server
            .mock("GET", "/jobs")
            .match_query(Matcher::UrlEncoded("start".into(), "100".into()))
            .with_status(200)
            .with_body(results_page(3, &card_refs))
            .create_async()
            .await;

        let config = test_config(&server);
        let client = Client::new();
        let selectors = PageSelectors::new();

        let page = fetch_page(&client, &config, &selectors, 2).await.unwrap();
        mock.assert_async().await;

        assert_eq!(page.index, 2);
        assert!(page.url.ends_with("start=100"));
        let ids: Vec<_> = page.listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["id0", "id1", "id2", "id3", "id4", "id5", "id6"]);
        assert_eq!(page.listings[0].summary, "Write Python");
        assert_eq!(page.listings[0].salary, "");
    }

    #[tokio::test]
    async fn test_fetch_page_non_200_is_a_page_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/jobs")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let config = test_config(&server);
        let selectors = PageSelectors::new();

        let failure = fetch_page(&Client::new(), &config, &selectors, 1)
            .await
            .unwrap_err();

        assert_eq!(failure.index, 1);
        assert!(failure.url.ends_with("start=50"));
        assert!(matches!(
            failure.error,
            ScrapeError::Status { status, .. } if status == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_fetch_html_transport_error() {
        // Nothing listens on port 9 (discard) on a test machine
        let err = fetch_html(&Client::new(), "http://127.0.0.1:9/jobs")
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Transport { .. }));
    }
}

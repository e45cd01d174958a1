// src/scrape/testing.rs
// Shared fixtures for tests that talk to a local mock server.

use url::Url;

use crate::config::SearchConfig;

// Builds a results page with `pager_links` pagination links and one card per
// (id, title) pair
pub(crate) fn results_page(pager_links: usize, cards: &[(&str, &str)]) -> String {
    let pager: String = (1..=pager_links)
        .map(|n| format!(r#"<a href="?start={}">{}</a>"#, n, n))
        .collect();
    let cards: String = cards
        .iter()
        .map(|(id, title)| {
            format!(
                r#"<div class="jobsearch-SerpJobCard" data-jk="{}">
                    <h2 class="title"><a>{}</a></h2>
                    <div class="sjcl">Seoul</div>
                    <div class="summary">  Write   Python </div>
                </div>"#,
                id, title
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="results">{}</div><div class="pagination">{}</div></body></html>"#,
        cards, pager
    )
}

// Config pointing at `<mock server>/jobs` with small concurrency limits
pub(crate) fn test_config(server: &mockito::ServerGuard) -> SearchConfig {
    SearchConfig {
        endpoint: Url::parse(&format!("{}/jobs", server.url())).unwrap(),
        card_concurrency: 2,
        page_concurrency: 2,
        ..SearchConfig::default()
    }
}

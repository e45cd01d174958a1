// src/scrape/selectors.rs
// =============================================================================
// CSS selectors for the search results markup.
//
// A results page looks roughly like this:
//
//   <div class="pagination"><a>2</a><a>3</a>...</div>
//   <div class="jobsearch-SerpJobCard" data-jk="abc123">
//     <h2 class="title"><a>Python Developer</a></h2>
//     <div class="sjcl">Company · Seoul</div>
//     <span class="salaryText">₩40,000,000</span>
//     <div class="summary">...</div>
//   </div>
//
// The selectors are parsed once per run and shared (read-only) by every
// page fetch.
// =============================================================================

use scraper::Selector;

/// Attribute on a listing card that holds the listing id
pub const LISTING_ID_ATTR: &str = "data-jk";

#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub card: Selector,
    pub title: Selector,
    pub location: Selector,
    pub salary: Selector,
    pub summary: Selector,
    pub pagination: Selector,
    pub pagination_link: Selector,
}

impl PageSelectors {
    pub fn new() -> Self {
        Self {
            card: parse(".jobsearch-SerpJobCard"),
            title: parse(".title>a"),
            location: parse(".sjcl"),
            salary: parse(".salaryText"),
            summary: parse(".summary"),
            pagination: parse(".pagination"),
            pagination_link: parse("a"),
        }
    }
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self::new()
    }
}

// The selectors above are constants, so a parse failure is a programmer error
fn parse(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_parse() {
        let _ = PageSelectors::new();
    }
}

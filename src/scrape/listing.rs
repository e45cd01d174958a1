// src/scrape/listing.rs
// =============================================================================
// Turns one listing card into one ListingRecord.
//
// Extraction never fails: a selector that matches nothing gives an empty
// string, and a card without an id attribute gets an empty id. Sites change
// their markup all the time and we'd rather write a row with holes in it
// than throw the whole page away.
//
// Two steps:
// 1. read_card: while the parsed document is alive, copy the id attribute
//    and the raw text of each field out of the card (owned Strings, Send)
// 2. RawCard::into_record: clean up the text; this runs on card workers
//
// Nothing is ever re-parsed, so the card element keeps its attributes no
// matter where it sits in the page (<div>, <td>, <li>, ...).
// =============================================================================

use scraper::{ElementRef, Selector};

use super::normalize::clean_text;
use super::selectors::{PageSelectors, LISTING_ID_ATTR};

/// One job posting as it appears on a results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    /// Site-assigned id, used to build the detail page link
    pub id: String,
    pub title: String,
    pub location: String,
    /// Empty when the posting doesn't publish a salary
    pub salary: String,
    pub summary: String,
}

/// Field text copied out of a card, not yet cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    pub id: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub summary: String,
}

impl RawCard {
    pub fn into_record(self) -> ListingRecord {
        ListingRecord {
            id: self.id,
            title: clean_text(&self.title),
            location: clean_text(&self.location),
            salary: clean_text(&self.salary),
            summary: clean_text(&self.summary),
        }
    }
}

// Copies the id and raw field text out of a card element
pub fn read_card(card: ElementRef<'_>, selectors: &PageSelectors) -> RawCard {
    RawCard {
        id: card.value().attr(LISTING_ID_ATTR).unwrap_or_default().to_string(),
        title: select_text(card, &selectors.title),
        location: select_text(card, &selectors.location),
        salary: select_text(card, &selectors.salary),
        summary: select_text(card, &selectors.summary),
    }
}

// Text of every element matching `selector` under `card`, concatenated.
// No match -> "".
fn select_text(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector).flat_map(|el| el.text()).collect()
}

// src/output/table.rs
// =============================================================================
// Writes scraped listings to a CSV file.
//
// Layout:
//   Link,Title,Location,Salary,Summary
//   https://kr.indeed.com/viewjob?jk=abc123,Python Developer,Seoul,,...
//
// Quoting (fields with commas, quotes or line breaks) is handled by the csv
// crate's default writer.
// =============================================================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ScrapeError};
use crate::scrape::ListingRecord;

pub const HEADER: [&str; 5] = ["Link", "Title", "Location", "Salary", "Summary"];

// Writes the header and one row per listing to any writer
//
// Parameters:
//   writer: where the CSV goes (a file, a Vec<u8>, ...)
//   listings: rows in output order
//   detail_url_prefix: prepended to each id to build the Link column
pub fn write_listings<'a, W, I>(writer: W, listings: I, detail_url_prefix: &str) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ListingRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    let mut rows = 0;
    for listing in listings {
        let link = format!("{}{}", detail_url_prefix, listing.id);
        csv_writer.write_record([
            link.as_str(),
            listing.title.as_str(),
            listing.location.as_str(),
            listing.salary.as_str(),
            listing.summary.as_str(),
        ])?;
        rows += 1;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

// Creates (or overwrites) `path` and writes the listings to it
pub fn write_listings_file<'a, I>(path: &Path, listings: I, detail_url_prefix: &str) -> Result<usize>
where
    I: IntoIterator<Item = &'a ListingRecord>,
{
    let file = File::create(path).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = write_listings(file, listings, detail_url_prefix)?;

    info!(path = %path.display(), rows, "wrote listings");
    Ok(rows)
}

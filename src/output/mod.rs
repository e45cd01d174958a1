// src/output/mod.rs
// Writing results: the CSV file and the end-of-run summary.

mod summary;
mod table;

pub use summary::{print_report, CrawlReport};
pub use table::write_listings_file;

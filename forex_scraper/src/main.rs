//! Forex rates scraper for the Indian Overseas Bank website.
//!
//! This binary performs one scrape run and exits. Internally it wires together three
//! sequential building blocks:
//!
//! - `fetcher` — issues a single HTTP GET against the bank's forex-rates page with a
//!   fixed browser-like header set, inflates a gzip body when the server sends one,
//!   and parses the result into an HTML document tree.
//! - `extractor` — scans every table on the page for the first row containing a `USD`
//!   cell and maps fixed cell offsets of that row into a timestamped [`RateQuote`].
//! - `persister` — appends the record to `data/forex_rates.csv`, writing the header
//!   row only when the file is first created.
//!
//! Failure policy:
//! - Any network, HTTP status, decompression, or no-match failure is terminal for the
//!   run. The error is logged and the process exits non-zero so an external scheduler
//!   (e.g. a cron-driven CI job) can treat the run as failed. Nothing is retried.
//! - When no USD row is found anywhere on the page, the raw document is saved to
//!   `debug_page.html` so the page layout change can be inspected offline.
//!
//! There is no configuration surface: the URL, headers, and file paths are constants.
#![warn(missing_docs)]
use forex_common::storage;
use forex_common::{Result, ScraperError};
use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

mod extractor;
mod fetcher;
mod persister;

fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("Failed to scrape forex data: {}", e);
        process::exit(1);
    }
}

/// One full scrape run: fetch the page, extract the USD row, append the record.
///
/// On extraction failure the raw page is persisted as a diagnostic artifact before
/// the error is returned; the snapshot is not part of normal success output.
fn run() -> Result<()> {
    fs::create_dir_all(storage::DATA_DIR)?;

    let document = fetcher::fetch_rates_page()?;

    match extractor::extract_usd_quote(&document) {
        Some(quote) => {
            persister::append_quote(&quote, &storage::rates_csv_path())?;
            info!("Forex data successfully scraped and saved");
            Ok(())
        }
        None => {
            warn!("USD data not found in any table");
            persister::save_debug_snapshot(
                &document.root_element().html(),
                Path::new(storage::DEBUG_SNAPSHOT_FILE),
            )?;
            Err(ScraperError::UsdRowNotFound)
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

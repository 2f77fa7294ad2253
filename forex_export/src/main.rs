//! Static JSON API generator for the accumulated forex rates.
//!
//! Reads the append-only CSV produced by `forex_scraper` and regenerates a set of
//! static endpoint files that can be served from any static host:
//!
//! - `public/api/all.json` — every recorded rate, in file order.
//! - `public/api/latest.json` — the most recent record, or `{}` when there is none.
//! - `public/api/month/<YYYY-MM>.json` — records grouped by capture month.
//! - `public/index.html` — a short documentation page for the endpoints.
//!
//! Like the scraper, the exporter is a single-shot run: any failure is logged and
//! collapsed into a non-zero exit status.
#![warn(missing_docs)]
use forex_common::Result;
use forex_common::storage;
use log::{error, info};
use std::path::Path;
use std::process;

mod endpoints;

fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("Error generating API endpoints: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let rows = endpoints::read_rows(&storage::rates_csv_path())?;
    info!("Loaded {} rate records", rows.len());

    endpoints::generate(&rows, Path::new(storage::PUBLIC_DIR))?;
    info!("API endpoints generated successfully");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

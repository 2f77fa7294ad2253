//! Shared storage path constants used by the scraper and the exporter.

use std::path::{Path, PathBuf};

/// Directory holding the accumulated rates file.
pub const DATA_DIR: &str = "data";
/// File name of the append-only rates CSV inside [`DATA_DIR`].
pub const RATES_CSV_FILE: &str = "forex_rates.csv";
/// Page snapshot written next to the binary when no USD row is found.
pub const DEBUG_SNAPSHOT_FILE: &str = "debug_page.html";
/// Root directory for the exporter's generated static site.
pub const PUBLIC_DIR: &str = "public";

/// Helper to build the full path of the rates CSV file.
pub fn rates_csv_path() -> PathBuf {
    Path::new(DATA_DIR).join(RATES_CSV_FILE)
}

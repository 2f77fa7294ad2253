//! Builds the static endpoint files from the recorded CSV rows.

use chrono::NaiveDateTime;
use forex_common::Result;
use forex_common::quote::QuoteRow;
use log::warn;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Timestamp layout written by the scraper.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load every row of the rates CSV at `path`.
///
/// A missing or unreadable file is an error: the exporter has nothing to
/// publish without the scraper's output.
pub fn read_rows(path: &Path) -> Result<Vec<QuoteRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Write all endpoint files under `public_dir`.
pub fn generate(rows: &[QuoteRow], public_dir: &Path) -> Result<()> {
    let api_dir = public_dir.join("api");
    let month_dir = api_dir.join("month");
    fs::create_dir_all(&month_dir)?;

    write_json(&api_dir.join("all.json"), &rows)?;

    let latest = match rows.last() {
        Some(row) => serde_json::to_value(row)?,
        None => json!({}),
    };
    write_json(&api_dir.join("latest.json"), &latest)?;

    for (month, entries) in group_by_month(rows) {
        write_json(&month_dir.join(format!("{}.json", month)), &entries)?;
    }

    fs::write(public_dir.join("index.html"), DOCS_PAGE)?;
    Ok(())
}

/// Group rows by the `YYYY-MM` month of their capture timestamp.
///
/// Rows whose timestamp does not parse are logged and skipped; one malformed
/// line in the historical file should not block publishing the rest.
fn group_by_month(rows: &[QuoteRow]) -> BTreeMap<String, Vec<&QuoteRow>> {
    let mut by_month: BTreeMap<String, Vec<&QuoteRow>> = BTreeMap::new();
    for row in rows {
        match NaiveDateTime::parse_from_str(&row.timestamp, TIMESTAMP_FORMAT) {
            Ok(dt) => by_month
                .entry(dt.format("%Y-%m").to_string())
                .or_default()
                .push(row),
            Err(e) => warn!("Skipping row with bad timestamp {:?}: {}", row.timestamp, e),
        }
    }
    by_month
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

/// Endpoint documentation served as the static site's landing page.
const DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Forex Rates API Documentation</title>
</head>
<body>
  <h1>Forex Rates API Documentation</h1>
  <p>USD forex rates collected from the Indian Overseas Bank website.</p>

  <h2>Endpoints</h2>
  <ul>
    <li><code>GET /api/all.json</code> — all historical forex rate data.</li>
    <li><code>GET /api/latest.json</code> — the most recent record only.</li>
    <li><code>GET /api/month/{YYYY-MM}.json</code> — records for one month, e.g. <code>2025-04</code>.</li>
  </ul>

  <h2>Record fields</h2>
  <ul>
    <li><code>timestamp</code> — capture date and time (IST).</li>
    <li><code>currency</code> — currency code, always <code>USD</code>.</li>
    <li><code>tt_sell</code> / <code>tt_buy</code> — telegraphic transfer rates.</li>
    <li><code>bills_sell</code> / <code>bills_buy</code> — bills rates.</li>
  </ul>
</body>
</html>
"#;

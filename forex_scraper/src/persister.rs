//! Append-only CSV persistence for scraped quotes.
//!
//! The rates file is an unbounded append-only log with a single header line
//! written once at file creation. Concurrent writers are not guarded against;
//! the assumed usage is one process per run, triggered by an external
//! scheduler.

use forex_common::Result;
use forex_common::quote::QuoteRow;
use forex_common::RateQuote;
use log::info;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Append one quote to the CSV file at `path`.
///
/// The header row is written only when the file does not yet exist, so the
/// file existence check has to happen before the file is opened for append.
pub fn append_quote(quote: &RateQuote, path: &Path) -> Result<()> {
    let file_exists = path.is_file();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    writer.serialize(QuoteRow::from(quote))?;
    writer.flush()?;

    info!("Data appended to {}", path.display());
    Ok(())
}

/// Save the raw page to `path` for offline inspection.
///
/// Used on the failure path when no USD row was found, which usually means
/// the bank changed the page layout.
pub fn save_debug_snapshot(html: &str, path: &Path) -> Result<()> {
    fs::write(path, html)?;
    info!("Saved HTML to {} for inspection", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_quote(timestamp: &str) -> RateQuote {
        RateQuote {
            timestamp: timestamp.to_string(),
            currency: "USD".to_string(),
            tt_sell: "82.10".to_string(),
            bills_sell: "82.30".to_string(),
            tt_buy: "82.50".to_string(),
            bills_buy: "82.70".to_string(),
        }
    }

    #[test]
    fn first_append_creates_file_with_header_and_one_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forex_rates.csv");

        append_quote(&sample_quote("2025-04-26 10:00:00"), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "timestamp,currency,tt_sell,tt_buy,bills_sell,bills_buy"
        );
        assert_eq!(
            lines[1],
            "2025-04-26 10:00:00,USD,82.10,82.30,82.50,82.70"
        );
    }

    #[test]
    fn second_append_does_not_duplicate_the_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forex_rates.csv");

        append_quote(&sample_quote("2025-04-26 10:00:00"), &path).unwrap();
        append_quote(&sample_quote("2025-04-26 11:00:00"), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].split(',').next(), Some("2025-04-26 10:00:00"));
        assert_eq!(lines[2].split(',').next(), Some("2025-04-26 11:00:00"));
        assert!(!lines[2].contains("timestamp"));
    }

    #[test]
    fn written_row_reads_back_identically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forex_rates.csv");
        let quote = sample_quote("2025-04-26 10:00:00");

        append_quote(&quote, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<QuoteRow> = reader
            .deserialize()
            .collect::<Result<_, csv::Error>>()
            .unwrap();
        assert_eq!(rows, vec![QuoteRow::from(&quote)]);
    }

    #[test]
    fn debug_snapshot_writes_the_raw_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("debug_page.html");

        save_debug_snapshot("<html><body>broken layout</body></html>", &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "<html><body>broken layout</body></html>");
    }
}

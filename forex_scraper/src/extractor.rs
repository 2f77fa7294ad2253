//! Locates the USD row on the parsed page and maps it into a [`RateQuote`].
//!
//! The page layout is not announced anywhere, so extraction is a positional
//! heuristic: tables are scanned in document order, rows in document order,
//! and the first row with any cell containing the substring `USD` wins. Rate
//! fields are then read from fixed cell offsets of that row. The offsets are
//! tied to the current layout of the bank's rate table and carry no semantic
//! validation; the cells-to-record mapping is kept as a pure function so it
//! can be unit tested and swapped without touching fetch or persist logic.

use chrono::Utc;
use chrono_tz::Asia::Kolkata;
use forex_common::RateQuote;
use forex_common::quote::NOT_AVAILABLE;
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

/// Cell offsets of the four rate fields inside the matched row.
///
/// Offsets 0 and 1 are label columns (currency name and unit) and are not
/// used. The order is tt_sell, bills_sell, tt_buy, bills_buy.
const RATE_OFFSETS: [usize; 4] = [2, 3, 4, 5];

/// Scan all tables for the first row containing a `USD` cell.
///
/// Returns a record stamped with the current IST capture time, or `None` when
/// no cell of any row of any table contains the substring `USD`.
pub fn extract_usd_quote(document: &Html) -> Option<RateQuote> {
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td, th").unwrap();

    let tables: Vec<ElementRef> = document.select(&table_selector).collect();
    info!("Found {} tables on the page", tables.len());

    for (table_idx, table) in tables.iter().enumerate() {
        debug!("Examining table {}", table_idx + 1);
        for row in table.select(&row_selector) {
            let cells = cell_texts(&row, &cell_selector);
            debug!("Row content: {:?}", cells);

            if cells.iter().any(|text| text.contains("USD")) {
                info!("Found USD entry");
                return Some(quote_from_cells(&cells, capture_timestamp()));
            }
        }
    }
    None
}

/// Collect the trimmed text content of every `td`/`th` cell in `row`.
fn cell_texts(row: &ElementRef, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

/// Pure mapping from a matched row's cells to a quote record.
///
/// Offsets beyond the row's cell count populate with the `N/A` sentinel
/// rather than failing; a short row still yields a record.
fn quote_from_cells(cells: &[String], timestamp: String) -> RateQuote {
    let field = |offset: usize| {
        cells
            .get(offset)
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };
    let [tt_sell, bills_sell, tt_buy, bills_buy] = RATE_OFFSETS.map(field);

    RateQuote {
        timestamp,
        currency: "USD".to_string(),
        tt_sell,
        bills_sell,
        tt_buy,
        bills_buy,
    }
}

/// Current capture time in IST, formatted `%Y-%m-%d %H:%M:%S`.
fn capture_timestamp() -> String {
    Utc::now()
        .with_timezone(&Kolkata)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn full_row_maps_offsets_to_rate_fields() {
        let quote = quote_from_cells(
            &cells(&["US DOLLAR (USD)", "1", "82.10", "82.30", "82.50", "82.70"]),
            "ts".to_string(),
        );

        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.tt_sell, "82.10");
        assert_eq!(quote.bills_sell, "82.30");
        assert_eq!(quote.tt_buy, "82.50");
        assert_eq!(quote.bills_buy, "82.70");
    }

    #[test]
    fn short_row_fills_missing_offsets_with_sentinel() {
        let quote = quote_from_cells(
            &cells(&["USD", "1", "82.30", "82.50", "82.70"]),
            "ts".to_string(),
        );

        assert_eq!(quote.tt_sell, "82.30");
        assert_eq!(quote.bills_sell, "82.50");
        assert_eq!(quote.tt_buy, "82.70");
        assert_eq!(quote.bills_buy, NOT_AVAILABLE);
    }

    #[test]
    fn label_only_row_is_all_sentinels() {
        let quote = quote_from_cells(&cells(&["USD"]), "ts".to_string());

        assert_eq!(quote.tt_sell, NOT_AVAILABLE);
        assert_eq!(quote.bills_sell, NOT_AVAILABLE);
        assert_eq!(quote.tt_buy, NOT_AVAILABLE);
        assert_eq!(quote.bills_buy, NOT_AVAILABLE);
    }

    #[test]
    fn extracts_first_usd_row_with_trimmed_cell_text() {
        let document = Html::parse_document(
            r#"<html><body>
            <table>
              <tr><th>Currency</th><th>Unit</th><th>TT Sell</th><th>Bills Sell</th><th>TT Buy</th><th>Bills Buy</th></tr>
              <tr><td>EURO (EUR)</td><td>1</td><td>90.10</td><td>90.30</td><td>90.50</td><td>90.70</td></tr>
              <tr><td> US DOLLAR (USD) </td><td>1</td><td> 82.10 </td><td>82.30</td><td>82.50</td><td>82.70</td></tr>
            </table>
            </body></html>"#,
        );

        let quote = extract_usd_quote(&document).unwrap();
        assert_eq!(quote.tt_sell, "82.10");
        assert_eq!(quote.bills_sell, "82.30");
        assert_eq!(quote.tt_buy, "82.50");
        assert_eq!(quote.bills_buy, "82.70");
        assert!(!quote.timestamp.is_empty());
    }

    #[test]
    fn scanning_stops_at_the_first_match_across_tables() {
        let document = Html::parse_document(
            r#"<html><body>
            <table>
              <tr><td>USD</td><td>1</td><td>11.1</td><td>22.2</td><td>33.3</td><td>44.4</td></tr>
            </table>
            <table>
              <tr><td>USD</td><td>1</td><td>99.9</td><td>99.9</td><td>99.9</td><td>99.9</td></tr>
            </table>
            </body></html>"#,
        );

        let quote = extract_usd_quote(&document).unwrap();
        assert_eq!(quote.tt_sell, "11.1");
    }

    #[test]
    fn usd_substring_inside_a_longer_cell_matches() {
        let document = Html::parse_document(
            "<table><tr><td>1 USD = INR</td><td>1</td><td>82.10</td></tr></table>",
        );

        let quote = extract_usd_quote(&document).unwrap();
        assert_eq!(quote.tt_sell, "82.10");
        assert_eq!(quote.bills_buy, NOT_AVAILABLE);
    }

    #[test]
    fn page_without_usd_yields_no_record() {
        let document = Html::parse_document(
            r#"<html><body>
            <table><tr><td>EURO (EUR)</td><td>1</td><td>90.10</td></tr></table>
            <p>USD appears outside any table</p>
            </body></html>"#,
        );

        assert!(extract_usd_quote(&document).is_none());
    }

    #[test]
    fn page_without_tables_yields_no_record() {
        let document = Html::parse_document("<html><body><p>no tables here</p></body></html>");
        assert!(extract_usd_quote(&document).is_none());
    }
}

//! USD rate record and its on-disk CSV row schema.
//!
//! A `RateQuote` is the record built from the matched table row on the bank's
//! forex page. All rate fields are free-form text exactly as scraped (after
//! whitespace trimming); no numeric parsing or validation is applied.
//!
//! `QuoteRow` is the shape a record takes inside `data/forex_rates.csv`. Its
//! column order is the historical file layout and differs from the record's
//! internal field names: see [`QuoteRow`].

use serde::{Deserialize, Serialize};

/// Sentinel written for rate cells that are absent from the matched row.
pub const NOT_AVAILABLE: &str = "N/A";

/// One USD quote captured from the bank's forex-rates page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuote {
    /// Capture time in IST, formatted `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    /// Currency code; always `"USD"` for records built by the extractor.
    pub currency: String,
    /// TT (telegraphic transfer) selling rate.
    pub tt_sell: String,
    /// Bills selling rate.
    pub bills_sell: String,
    /// TT buying rate.
    pub tt_buy: String,
    /// Bills buying rate.
    pub bills_buy: String,
}

/// CSV row in the historical on-disk column order.
///
/// The header is `timestamp,currency,tt_sell,tt_buy,bills_sell,bills_buy`,
/// but the existing data files carry the `bills_sell` value under the
/// `tt_buy` column and the `tt_buy` value under the `bills_sell` column.
/// The transposition is kept so freshly appended rows stay consistent with
/// every row already on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Capture time, copied verbatim from the record.
    pub timestamp: String,
    /// Currency code column.
    pub currency: String,
    /// TT selling rate column.
    pub tt_sell: String,
    /// Column named `tt_buy`; holds the record's `bills_sell` value.
    pub tt_buy: String,
    /// Column named `bills_sell`; holds the record's `tt_buy` value.
    pub bills_sell: String,
    /// Bills buying rate column.
    pub bills_buy: String,
}

impl From<&RateQuote> for QuoteRow {
    fn from(quote: &RateQuote) -> Self {
        QuoteRow {
            timestamp: quote.timestamp.clone(),
            currency: quote.currency.clone(),
            tt_sell: quote.tt_sell.clone(),
            tt_buy: quote.bills_sell.clone(),
            bills_sell: quote.tt_buy.clone(),
            bills_buy: quote.bills_buy.clone(),
        }
    }
}

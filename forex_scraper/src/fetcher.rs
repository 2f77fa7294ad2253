//! Single-shot HTTP fetch of the bank's forex-rates page.
//!
//! The request carries a fixed browser-like `User-Agent` and an explicit
//! `Accept-Encoding` header. Because the client does not negotiate transparent
//! decompression, a gzip body arrives raw and is inflated here when the gzip
//! magic bytes are present. A body that claims to be gzip but fails to inflate
//! aborts the run; there is no fallback to the raw bytes.

use flate2::read::GzDecoder;
use forex_common::{Result, ScraperError};
use log::info;
use reqwest::blocking::Client;
use reqwest::header;
use scraper::{Html, Selector};
use std::io::Read;

/// Fixed URL of the forex-rates page.
pub const RATES_URL: &str = "https://www.iob.in/iob_forex-rates.aspx";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_ENCODING: &str = "gzip, deflate, br";

/// gzip member signature: magic bytes plus the deflate compression method.
const GZIP_MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

/// Perform the single GET request and parse the response into a document tree.
///
/// Terminal failures for the run: network errors, a non-success HTTP status,
/// and gzip decompression errors. The page title is logged as a cheap sanity
/// signal that the expected page came back.
pub fn fetch_rates_page() -> Result<Html> {
    let client = Client::new();
    let response = client
        .get(RATES_URL)
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::ACCEPT_ENCODING, ACCEPT_ENCODING)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::HttpStatus(status));
    }

    let raw = response.bytes()?;
    let body = decode_body(&raw)?;
    let document = Html::parse_document(&String::from_utf8_lossy(&body));

    let title_selector = Selector::parse("title").unwrap();
    let title = document
        .select(&title_selector)
        .next()
        .map(|t| t.text().collect::<String>());
    info!(
        "Page title: {}",
        title.as_deref().unwrap_or("No title found")
    );

    Ok(document)
}

/// Inflate `raw` when it begins with the gzip signature, otherwise pass it through.
fn decode_body(raw: &[u8]) -> Result<Vec<u8>> {
    if raw.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzDecoder::new(raw);
        let mut body = Vec::new();
        decoder
            .read_to_end(&mut body)
            .map_err(|e| ScraperError::Decompress(e.to_string()))?;
        Ok(body)
    } else {
        Ok(raw.to_vec())
    }
}

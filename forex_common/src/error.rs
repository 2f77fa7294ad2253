//! Error types shared between the scraper and the exporter.
//!
//! The `ScraperError` enum unifies common failure cases for I/O, HTTP,
//! CSV/JSON serialization, and the scraping logic itself, allowing crates to
//! propagate a single error type. Every failure mode ends the run: the
//! binaries log the error and exit non-zero, with no retry at any layer.
use std::io;

use thiserror::Error;

/// Unified error type shared by the scraper and the exporter.
#[derive(Error, Debug)]
pub enum ScraperError {
    /// I/O error originating from the standard library (files, directories).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Network-level failure while sending the request or reading the body.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The rates page responded with a non-success status code.
    #[error("HTTP status error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body carried the gzip magic bytes but failed to inflate.
    #[error("Error decompressing gzipped content: {0}")]
    Decompress(String),

    /// Failure while reading or writing the rates CSV file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure while encoding the exporter's JSON endpoint files.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No table row on the fetched page contained a USD cell.
    #[error("USD data not found in any table")]
    UsdRowNotFound,
}

//!
//! Common types and utilities shared by the forex scraper and the JSON exporter.
//!
//! This crate aggregates:
//! - `error` — unified error type `ScraperError` used across the workspace.
//! - `result` — handy `Result<T, ScraperError>` alias.
//! - `quote` — the scraped USD rate record and its on-disk CSV row schema.
//! - `storage` — data directory and file path constants shared by both binaries.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod storage;

pub use error::ScraperError;
pub use result::Result;
pub use quote::RateQuote;

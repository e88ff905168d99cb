// File: crates/dashboard-core/src/error.rs
// Summary: Error types for price-series construction and upstream fetching.

use chrono::NaiveDate;
use thiserror::Error;

/// Rejected input while building a `Bar` or `PriceSeries`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("invalid bar on {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: &'static str },

    #[error("dates must be strictly increasing: {prev} is followed by {next}")]
    UnorderedDates { prev: NaiveDate, next: NaiveDate },
}

/// Failure reported by a `PriceSource`. The render pass absorbs these as "no data".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no price data for {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("upstream failure: {0}")]
    Upstream(String),
}

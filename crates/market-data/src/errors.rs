//! Error types for NSE quote fetching

use thiserror::Error;

/// Errors that can occur while fetching NSE quote data
#[derive(Error, Debug)]
pub enum NseError {
    /// HTTP client construction or transport failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The symbol list was empty
    #[error("No symbols provided")]
    NoSymbols,

    /// Every requested symbol failed to produce a row
    #[error("No quotes fetched: all {0} symbols failed")]
    NoQuotesFetched(usize),
}

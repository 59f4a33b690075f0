//! NSE India quote snapshot fetching.
//!
//! Talks to the quote endpoints of the NSE website, which sit behind a
//! cookie-based anti-bot gate: API calls only succeed after a browser-like
//! client has visited the regular site pages and collected session cookies.
//!
//! # Flow
//!
//! ```text
//! SessionProvider::create
//!        |              (primed reqwest client, cookie jar)
//!        v
//! QuoteFetcher::fetch ---> GET /api/quote-equity?symbol=X
//!        |                 GET /api/quote-equity?symbol=X&section=trade_info
//!        v
//! FetchOutcome: Success(QuoteRow) | SessionExpired | Failed
//!        |
//!        v
//! NseQuoteService::run   (sequential, paced, one retry after re-priming)
//! ```
//!
//! The merge layer folds both endpoint payloads into one flat [`QuoteRow`]
//! using fallback chains for the figures that move between response
//! sections. Missing numeric fields coerce to zero, so sparse responses
//! still produce usable rows.

pub mod config;
pub mod errors;
pub mod fetcher;
pub mod headers;
mod merge;
pub mod models;
pub mod service;
pub mod session;

pub use config::{FetchConfig, NSE_BASE_URL};
pub use errors::NseError;
pub use fetcher::QuoteFetcher;
pub use models::{clean_value, FetchOutcome, Payload, QuoteRow, COLUMNS};
pub use service::{NseQuoteService, NseQuoteSource, QuoteSource, RunSummary, SymbolProgress};
pub use session::SessionProvider;

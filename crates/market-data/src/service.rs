//! Sequential run orchestration
//!
//! Walks a symbol list strictly in order, one fetch at a time, with a
//! randomized pause between symbols to stay under the upstream rate limits.
//! A `SessionExpired` outcome triggers exactly one session renewal and one
//! retried fetch; every other failure just skips the symbol. The runner
//! talks to the endpoints through the [`QuoteSource`] seam so the retry
//! policy can be exercised without a network.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::{FetchConfig, SYMBOL_PAUSE_MAX_MS, SYMBOL_PAUSE_MIN_MS};
use crate::errors::NseError;
use crate::fetcher::QuoteFetcher;
use crate::models::row::{FetchOutcome, QuoteRow};
use crate::session::SessionProvider;

/// Session-backed source of quote rows for the sequential runner.
#[async_trait]
pub trait QuoteSource {
    /// One fetch attempt for `symbol` with the current session.
    async fn fetch(&self, symbol: &str) -> FetchOutcome;

    /// Drop the current session and prime a fresh one.
    async fn renew_session(&mut self) -> Result<(), NseError>;
}

/// The live source: a [`QuoteFetcher`] plus the [`SessionProvider`] that
/// re-primes it on expiry.
pub struct NseQuoteSource {
    session: SessionProvider,
    config: FetchConfig,
    fetcher: QuoteFetcher,
}

impl NseQuoteSource {
    /// Prime an initial session and wrap it in a source.
    pub async fn connect(config: FetchConfig) -> Result<Self, NseError> {
        let session = SessionProvider::new(config.clone());
        let fetcher = QuoteFetcher::new(session.create().await?, config.clone());
        Ok(Self {
            session,
            config,
            fetcher,
        })
    }
}

#[async_trait]
impl QuoteSource for NseQuoteSource {
    async fn fetch(&self, symbol: &str) -> FetchOutcome {
        self.fetcher.fetch(symbol).await
    }

    async fn renew_session(&mut self) -> Result<(), NseError> {
        // The old client is discarded wholesale, cookie jar included.
        self.fetcher = QuoteFetcher::new(self.session.create().await?, self.config.clone());
        Ok(())
    }
}

/// Progress report delivered after each symbol completes.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolProgress {
    pub symbol: String,
    /// Symbols processed so far, the current one included.
    pub completed: usize,
    pub total: usize,
    pub ok: bool,
}

/// Rows and skipped symbols of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// One row per fetched symbol, in input order.
    pub rows: Vec<QuoteRow>,
    /// Symbols that produced no row, in input order.
    pub skipped: Vec<String>,
}

/// Fetches a list of symbols strictly sequentially with polite pacing.
pub struct NseQuoteService<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> NseQuoteService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run the whole symbol list. `on_progress` fires after each symbol.
    ///
    /// Per-symbol failures never abort the run; the row is omitted and the
    /// next symbol is tried. Zero successes across a non-empty list is an
    /// overall failure.
    pub async fn run(
        &mut self,
        symbols: &[String],
        mut on_progress: impl FnMut(&SymbolProgress),
    ) -> Result<RunSummary, NseError> {
        if symbols.is_empty() {
            return Err(NseError::NoSymbols);
        }

        let mut rows = Vec::with_capacity(symbols.len());
        let mut skipped = Vec::new();

        for (index, symbol) in symbols.iter().enumerate() {
            if index > 0 {
                sleep(symbol_pause()).await;
            }

            let outcome = match self.source.fetch(symbol).await {
                FetchOutcome::SessionExpired => {
                    info!("session expired, re-priming before retrying {}", symbol);
                    self.source.renew_session().await?;
                    match self.source.fetch(symbol).await {
                        // A second expiry is final for this symbol.
                        FetchOutcome::SessionExpired => FetchOutcome::Failed,
                        outcome => outcome,
                    }
                }
                outcome => outcome,
            };

            let ok = match outcome {
                FetchOutcome::Success(row) => {
                    rows.push(row);
                    true
                }
                _ => {
                    warn!("skipping {}: no usable quote data", symbol);
                    skipped.push(symbol.clone());
                    false
                }
            };

            on_progress(&SymbolProgress {
                symbol: symbol.clone(),
                completed: index + 1,
                total: symbols.len(),
                ok,
            });
        }

        if rows.is_empty() {
            return Err(NseError::NoQuotesFetched(symbols.len()));
        }

        Ok(RunSummary { rows, skipped })
    }
}

impl NseQuoteService<NseQuoteSource> {
    /// Service wired to the live NSE endpoints.
    pub async fn connect(config: FetchConfig) -> Result<Self, NseError> {
        Ok(Self::new(NseQuoteSource::connect(config).await?))
    }
}

/// Randomized pause between consecutive symbols.
fn symbol_pause() -> Duration {
    let millis = rand::thread_rng().gen_range(SYMBOL_PAUSE_MIN_MS..=SYMBOL_PAUSE_MAX_MS);
    Duration::from_millis(millis)
}

//! Endpoint configuration for the NSE quote API

use std::time::Duration;

/// Production NSE host.
pub const NSE_BASE_URL: &str = "https://www.nseindia.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Pause between the two endpoint calls made for one symbol.
const ENDPOINT_DELAY_MS: u64 = 200;

/// Bounds for the randomized pause between consecutive symbols.
pub(crate) const SYMBOL_PAUSE_MIN_MS: u64 = 500;
pub(crate) const SYMBOL_PAUSE_MAX_MS: u64 = 1000;

/// Where and how the client talks to NSE.
///
/// Only the base URL varies, so tests can point a client at a local mock
/// server; timeouts and paths are fixed.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    base_url: String,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self {
            base_url: NSE_BASE_URL.to_string(),
        }
    }

    /// Config pointed at a different host (no trailing slash), for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Site root, the first priming stop.
    pub fn root_page(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// A representative quote page, the second priming stop.
    pub fn quote_page(&self) -> String {
        format!("{}/get-quotes/equity?symbol=RELIANCE", self.base_url)
    }

    /// Main quote endpoint for `symbol`.
    pub fn quote_api(&self, symbol: &str) -> String {
        format!(
            "{}/api/quote-equity?symbol={}",
            self.base_url,
            urlencoding::encode(symbol)
        )
    }

    /// Secondary trade-info endpoint for `symbol`.
    pub fn trade_info_api(&self, symbol: &str) -> String {
        format!(
            "{}/api/quote-equity?symbol={}&section=trade_info",
            self.base_url,
            urlencoding::encode(symbol)
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    pub(crate) fn endpoint_delay(&self) -> Duration {
        Duration::from_millis(ENDPOINT_DELAY_MS)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

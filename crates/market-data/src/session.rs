//! Session bootstrap for the NSE quote API
//!
//! NSE's API endpoints sit behind an anti-bot gate: they refuse clients
//! that have not first visited the regular website, where the server sets
//! session cookies. `SessionProvider` builds a client with a cookie jar and
//! browser headers, then visits the bootstrap pages so the jar gets
//! populated. Priming may fail silently; the client is returned regardless,
//! and a stale or missing session surfaces later as a 401 on the API.

use reqwest::Client;
use tracing::debug;

use crate::config::FetchConfig;
use crate::errors::NseError;
use crate::headers::nse_headers;

/// Builds primed HTTP clients for the NSE endpoints.
#[derive(Debug, Clone)]
pub struct SessionProvider {
    config: FetchConfig,
}

impl SessionProvider {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Build a client and prime its cookie jar.
    ///
    /// Only client construction can fail. The two priming requests are
    /// best-effort: failures are logged and swallowed, since an unprimed
    /// client still works until the API answers 401.
    pub async fn create(&self) -> Result<Client, NseError> {
        let client = Client::builder()
            .default_headers(nse_headers())
            .cookie_store(true)
            .timeout(self.config.request_timeout())
            .build()?;

        for url in [self.config.root_page(), self.config.quote_page()] {
            match client.get(&url).send().await {
                Ok(response) => debug!("primed {} ({})", url, response.status()),
                Err(err) => debug!("priming {} failed: {}", url, err),
            }
        }

        Ok(client)
    }
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new(FetchConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_visits_both_priming_pages() {
        let mut server = mockito::Server::new_async().await;
        let root = server
            .mock("GET", "/")
            .with_status(200)
            .create_async()
            .await;
        let quote_page = server
            .mock("GET", "/get-quotes/equity?symbol=RELIANCE")
            .with_status(200)
            .create_async()
            .await;

        let provider = SessionProvider::new(FetchConfig::with_base_url(server.url()));
        provider.create().await.unwrap();

        root.assert_async().await;
        quote_page.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_survives_priming_failures() {
        // Nothing is listening here, so both priming requests error out.
        let provider =
            SessionProvider::new(FetchConfig::with_base_url("http://127.0.0.1:9"));
        assert!(provider.create().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_survives_priming_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _root = server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let provider = SessionProvider::new(FetchConfig::with_base_url(server.url()));
        assert!(provider.create().await.is_ok());
    }

    #[tokio::test]
    async fn test_priming_cookies_persist_on_client() {
        let mut server = mockito::Server::new_async().await;
        let _root = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("set-cookie", "nseappid=abc123; Path=/")
            .create_async()
            .await;
        let followup = server
            .mock("GET", "/api/ping")
            .match_header("cookie", mockito::Matcher::Regex("nseappid=abc123".to_string()))
            .with_status(200)
            .create_async()
            .await;

        let provider = SessionProvider::new(FetchConfig::with_base_url(server.url()));
        let client = provider.create().await.unwrap();
        client
            .get(format!("{}/api/ping", server.url()))
            .send()
            .await
            .unwrap();

        followup.assert_async().await;
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_priming() {
        let provider = SessionProvider::default();
        assert!(provider.create().await.is_ok());
    }
}

//! Per-symbol quote fetching against the two NSE endpoints

use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::merge::build_row;
use crate::models::payload::Payload;
use crate::models::row::FetchOutcome;

/// Fetches and merges quote data one symbol at a time using a primed client.
#[derive(Clone)]
pub struct QuoteFetcher {
    client: Client,
    config: FetchConfig,
}

impl QuoteFetcher {
    pub fn new(client: Client, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// Fetch one symbol.
    ///
    /// Never returns an error: network and parse problems collapse into
    /// [`FetchOutcome::Failed`], and a 401 from the main endpoint into
    /// [`FetchOutcome::SessionExpired`] so the caller can re-prime. The
    /// secondary trade-info call is best-effort; losing it only narrows
    /// the row's field coverage.
    pub async fn fetch(&self, symbol: &str) -> FetchOutcome {
        let symbol = symbol.trim().to_uppercase();

        let response = match self.client.get(self.config.quote_api(&symbol)).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("quote request for {} failed: {}", symbol, err);
                return FetchOutcome::Failed;
            }
        };

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!("session expired on {}", symbol);
            return FetchOutcome::SessionExpired;
        }

        let quote = payload_from(response).await;

        // Courtesy pause between the two endpoint hits.
        sleep(self.config.endpoint_delay()).await;

        let trade = match self
            .client
            .get(self.config.trade_info_api(&symbol))
            .send()
            .await
        {
            Ok(response) => payload_from(response).await,
            Err(err) => {
                debug!("trade-info request for {} failed: {}", symbol, err);
                Payload::empty()
            }
        };

        if quote.is_empty() {
            warn!("empty quote response for {}", symbol);
            return FetchOutcome::Failed;
        }

        FetchOutcome::Success(build_row(&symbol, &quote, &trade))
    }
}

/// Body as JSON when the status is 200; anything else is an empty payload.
async fn payload_from(response: Response) -> Payload {
    if response.status() != StatusCode::OK {
        return Payload::empty();
    }
    match response.json().await {
        Ok(value) => Payload::new(value),
        Err(err) => {
            debug!("unparseable response body: {}", err);
            Payload::empty()
        }
    }
}

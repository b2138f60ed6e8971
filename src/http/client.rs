//! Low-level HTTP client — `MarketHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the session boundary). Requests are fire-and-forget:
//! a failed call surfaces one error and is never retried.

use crate::domain::chart::wire::MarketChartResponse;
use crate::domain::prices::wire::SimplePriceResponse;
use crate::error::HttpError;
use crate::shared::{join_ids, AssetId};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the market-data REST API.
#[derive(Clone)]
pub struct MarketHttp {
    base_url: String,
    client: Client,
}

impl MarketHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Spot prices in USD for a set of asset ids.
    pub async fn simple_price(
        &self,
        ids: &[AssetId],
    ) -> Result<SimplePriceResponse, HttpError> {
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd",
            self.base_url,
            join_ids(ids)
        );
        self.get(&url).await
    }

    /// Daily price series for one asset over the trailing `days` days.
    pub async fn market_chart(
        &self,
        id: &AssetId,
        days: u32,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval=daily",
            self.base_url, id, days
        );
        self.get(&url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

//! # Currency Rates
//!
//! Outbound HTTP adapter for the external exchange-rate provider.
//!
//! The provider exposes `GET <base-url>/<api-key>/latest/<BASE>` and returns
//! a JSON body carrying a `conversion_rates` map from currency code to rate.
//! This crate turns that wire format into a [`RateTable`] and classifies
//! every failure mode into a [`ProviderError`] for the service layer.
//!
//! # Example
//! ```no_run
//! use currency_rates::{ExchangeRateApiProvider, ProviderConfig};
//! use currency_types::RateProvider;
//!
//! # async fn run() {
//! let provider = ExchangeRateApiProvider::new(ProviderConfig::new(
//!     "https://v6.exchangerate-api.com/v6",
//!     "my-api-key",
//! ));
//! let table = provider.fetch_rates("USD").await.unwrap();
//! println!("{:?}", table.rate_for("EUR"));
//! # }
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use currency_types::{ProviderError, RateProvider, RateTable};

/// Connection settings for the rate provider, injected at construction.
///
/// Kept explicit rather than read from ambient process state so the
/// adapter stays testable.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider root, e.g. `https://v6.exchangerate-api.com/v6`
    pub base_url: String,
    /// Account key embedded in the request path. An empty key is accepted
    /// here - the provider rejects it and that surfaces as a provider
    /// failure at call time.
    pub api_key: String,
}

impl ProviderConfig {
    /// Creates a config, trimming any trailing slash off the base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Payload returned by the provider's `latest` endpoint.
///
/// Everything except `conversion_rates` is ignored.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    conversion_rates: HashMap<String, f64>,
}

/// [`RateProvider`] implementation backed by the exchangerate-api service.
pub struct ExchangeRateApiProvider {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl ExchangeRateApiProvider {
    /// Creates a provider with a fresh HTTP client.
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Creates a provider reusing an existing HTTP client.
    pub fn with_client(config: ProviderConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    fn latest_url(&self, base: &str) -> String {
        format!(
            "{}/{}/latest/{}",
            self.config.base_url, self.config.api_key, base
        )
    }
}

#[async_trait::async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, ProviderError> {
        let base = base.to_uppercase();
        let url = self.latest_url(&base);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: LatestRatesResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Malformed(err.to_string()))?;

        tracing::debug!(%base, rates = payload.conversion_rates.len(), "fetched rate table");

        Ok(RateTable::new(base, payload.conversion_rates))
    }
}

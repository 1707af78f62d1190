//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate providers.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::RateTable;

/// Error type for provider operations.
///
/// These variants describe what went wrong on the wire. The service layer
/// collapses all of them into one caller-facing error, so transport detail
/// never crosses the service boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the full rate table keyed by `base` as the base currency.
    ///
    /// Exactly one outbound call per invocation; no retries, no caching.
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, ProviderError>;
}

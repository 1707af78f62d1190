//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub provider_base_url: String,
    pub provider_api_key: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// The provider API key is deliberately not required here: a missing
    /// key is not a startup error, it surfaces as a provider failure on
    /// the first conversion.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let provider_base_url = env::var("EXCHANGE_RATE_API_URL")
            .unwrap_or_else(|_| "https://v6.exchangerate-api.com/v6".to_string());

        let provider_api_key = env::var("EXCHANGE_RATE_API_KEY").unwrap_or_default();

        Ok(Self {
            port,
            provider_base_url,
            provider_api_key,
        })
    }
}

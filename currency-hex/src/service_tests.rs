//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use currency_types::{ConversionError, ConvertQuery, ProviderError, RateProvider, RateTable};

    use crate::ConversionService;
    use crate::service::validate_inputs;

    /// Provider stub serving a fixed rate table, or failing on demand.
    pub struct MockProvider {
        rates: HashMap<String, f64>,
        fail: bool,
        calls: Mutex<u32>,
    }

    impl MockProvider {
        pub fn with_rates(rates: &[(&str, f64)]) -> Self {
            Self {
                rates: rates.iter().map(|(code, rate)| (code.to_string(), *rate)).collect(),
                fail: false,
                calls: Mutex::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                rates: HashMap::new(),
                fail: true,
                calls: Mutex::new(0),
            }
        }

        pub fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl RateProvider for MockProvider {
        async fn fetch_rates(&self, base: &str) -> Result<RateTable, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            if self.fail {
                return Err(ProviderError::Transport("connection refused".to_string()));
            }
            Ok(RateTable::new(base, self.rates.clone()))
        }
    }

    #[tokio::test]
    async fn test_convert_success() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        let result = service
            .convert(ConvertQuery::new("USD", "EUR", "100"))
            .await
            .unwrap();

        assert_eq!(result.from, "USD");
        assert_eq!(result.to, "EUR");
        assert_eq!(result.rate, 0.85);
        assert_eq!(result.amount, 100.0);
        assert_eq!(result.converted_amount, 85.0);
        assert_eq!(service.provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_convert_normalizes_lowercase_input() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        let result = service
            .convert(ConvertQuery::new("usd", "eur", "100"))
            .await
            .unwrap();

        assert_eq!(result.from, "USD");
        assert_eq!(result.to, "EUR");
        assert_eq!(result.converted_amount, 85.0);
    }

    #[tokio::test]
    async fn test_convert_unsupported_currency() {
        let service = ConversionService::new(MockProvider::with_rates(&[]));

        let err = service
            .convert(ConvertQuery::new("USD", "XXX", "100"))
            .await
            .unwrap_err();

        assert!(matches!(&err, ConversionError::UnsupportedCurrency(code) if code == "XXX"));
        assert_eq!(err.to_string(), "Currency 'XXX' is not supported.");
    }

    #[tokio::test]
    async fn test_convert_missing_parameters_skip_the_provider() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        let queries = [
            ConvertQuery {
                from: None,
                to: Some("EUR".to_string()),
                amount: Some("100".to_string()),
            },
            ConvertQuery::new("", "EUR", "100"),
            ConvertQuery::new("USD", "", "100"),
            ConvertQuery::new("USD", "EUR", ""),
            ConvertQuery::default(),
        ];

        for query in queries {
            let err = service.convert(query).await.unwrap_err();
            assert!(matches!(err, ConversionError::MissingParameters));
        }

        // Validation failed, so no network call was ever issued.
        assert_eq!(service.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_convert_rejects_non_numeric_amount() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        for amount in ["not-a-number", "12.5.3", "NaN"] {
            let err = service
                .convert(ConvertQuery::new("USD", "EUR", amount))
                .await
                .unwrap_err();
            assert!(matches!(err, ConversionError::InvalidAmount), "{amount}");
        }
        assert_eq!(service.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_convert_rejects_non_positive_amount() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        for amount in ["-5", "-0.01", "0"] {
            let err = service
                .convert(ConvertQuery::new("USD", "EUR", amount))
                .await
                .unwrap_err();
            assert!(matches!(err, ConversionError::InvalidAmount), "{amount}");
        }
    }

    #[tokio::test]
    async fn test_convert_provider_failure_is_generic() {
        let service = ConversionService::new(MockProvider::failing());

        let err = service
            .convert(ConvertQuery::new("USD", "EUR", "100"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::RatesUnavailable));
        assert_eq!(
            err.to_string(),
            "Failed to fetch exchange rates. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_convert_rounds_half_up_to_two_digits() {
        // 0.125 * 1 = 0.125 -> 0.13 under half-up rounding
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.125)]));

        let result = service
            .convert(ConvertQuery::new("USD", "EUR", "1"))
            .await
            .unwrap();

        assert_eq!(result.converted_amount, 0.13);
    }

    #[tokio::test]
    async fn test_convert_is_idempotent() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        let first = service
            .convert(ConvertQuery::new("USD", "EUR", "42.5"))
            .await
            .unwrap();
        let second = service
            .convert(ConvertQuery::new("USD", "EUR", "42.5"))
            .await
            .unwrap();

        assert_eq!(first, second);
        // Each call triggers its own round-trip; nothing is cached.
        assert_eq!(service.provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_resolve_rate_returns_the_table_entry() {
        let service = ConversionService::new(MockProvider::with_rates(&[("EUR", 0.85)]));

        let rate = service.resolve_rate("USD", "eur").await.unwrap();
        assert_eq!(rate, 0.85);
    }

    #[test]
    fn test_validate_inputs_normalizes_and_parses() {
        let (from, to, amount) =
            validate_inputs(&ConvertQuery::new("usd", "eur", "100.50")).unwrap();
        assert_eq!(from, "USD");
        assert_eq!(to, "EUR");
        assert_eq!(amount, 100.5);
    }

    #[test]
    fn test_validate_inputs_zero_fails_positivity_not_presence() {
        let err = validate_inputs(&ConvertQuery::new("USD", "EUR", "0")).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidAmount));
    }
}

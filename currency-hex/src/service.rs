//! Conversion Application Service
//!
//! Orchestrates the conversion pipeline through the provider port.
//! Contains NO transport logic - pure business orchestration.

use currency_types::{ConversionError, ConversionResult, ConvertQuery, RateProvider};

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with a mock provider
/// - Compile-time checks for port implementation
pub struct ConversionService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the full conversion pipeline: validate, resolve, convert.
    ///
    /// Strictly ordered and all-or-nothing: no step runs if an earlier one
    /// failed, no network call happens before validation passes, and no
    /// partial result is ever produced.
    pub async fn convert(&self, query: ConvertQuery) -> Result<ConversionResult, ConversionError> {
        let (from, to, amount) = validate_inputs(&query)?;

        let rate = self.resolve_rate(&from, &to).await?;

        let converted_amount = round_to_cents(rate * amount);

        Ok(ConversionResult {
            from,
            to,
            rate,
            amount,
            converted_amount,
        })
    }

    /// Resolves the exchange rate for one currency pair.
    ///
    /// Issues exactly one provider call for the full table keyed by `from`,
    /// then looks up `to`. An unsupported target is a domain error and
    /// surfaces as-is; every provider failure collapses into
    /// [`ConversionError::RatesUnavailable`], with the cause logged here
    /// and nowhere else.
    pub async fn resolve_rate(&self, from: &str, to: &str) -> Result<f64, ConversionError> {
        let table = self.provider.fetch_rates(from).await.map_err(|err| {
            tracing::warn!(%err, %from, "failed to fetch rate table");
            ConversionError::RatesUnavailable
        })?;

        table
            .rate_for(to)
            .ok_or_else(|| ConversionError::UnsupportedCurrency(to.trim().to_uppercase()))
    }
}

/// Validates the raw conversion parameters.
///
/// Two independent gates, in order: presence (absent or empty string fails),
/// then numeric validity (parseable, finite, strictly positive). A literal
/// `"0"` passes the presence gate and fails the positivity gate.
///
/// On success yields the uppercased codes and the parsed amount, so raw
/// strings are interpreted exactly once.
pub fn validate_inputs(query: &ConvertQuery) -> Result<(String, String, f64), ConversionError> {
    let (Some(from), Some(to), Some(raw_amount)) = (
        query.from.as_deref().filter(|s| !s.is_empty()),
        query.to.as_deref().filter(|s| !s.is_empty()),
        query.amount.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ConversionError::MissingParameters);
    };

    let amount: f64 = raw_amount
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ConversionError::InvalidAmount);
    }

    Ok((from.trim().to_uppercase(), to.trim().to_uppercase(), amount))
}

/// Rounds to 2 fractional digits, half away from zero (half-up for the
/// positive values that reach it).
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

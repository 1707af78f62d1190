//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw conversion parameters, exactly as they arrive on the query string.
///
/// Every field is an optional string: presence and numeric validity are
/// the validator's job, not the deserializer's, so a missing or malformed
/// parameter must survive extraction and reach the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ConvertQuery {
    /// Base currency code (3-letter, case-insensitive)
    #[schema(example = "USD")]
    pub from: Option<String>,
    /// Target currency code (3-letter, case-insensitive)
    #[schema(example = "EUR")]
    pub to: Option<String>,
    /// Amount to convert, as written by the caller
    #[schema(example = "100")]
    pub amount: Option<String>,
}

impl ConvertQuery {
    /// Builds a query with all three parameters present.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            amount: Some(amount.into()),
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Base currency code, normalized to uppercase
    #[schema(example = "USD")]
    pub from: String,
    /// Target currency code, normalized to uppercase
    #[schema(example = "EUR")]
    pub to: String,
    /// Units of `to` per unit of `from`
    #[schema(example = 0.85)]
    pub rate: f64,
    /// Amount that was converted, parsed from the raw input
    #[schema(example = 100.0)]
    pub amount: f64,
    /// `rate * amount`, rounded half-up to 2 fractional digits
    #[schema(example = 85.0)]
    pub converted_amount: f64,
}

//! Error types for the currency conversion service.

/// Errors produced by the conversion pipeline.
///
/// The first three variants are input errors the caller can fix by
/// correcting the request. `RatesUnavailable` is an upstream failure:
/// its cause is logged where it happens and the public message stays
/// provider-agnostic.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// `from`, `to`, or `amount` is absent or empty.
    #[error("Missing required parameters: 'from', 'to', or 'amount'.")]
    MissingParameters,

    /// `amount` is present but not parseable as a positive number.
    #[error("Amount must be a positive number.")]
    InvalidAmount,

    /// The target currency is not in the provider's rate table.
    #[error("Currency '{0}' is not supported.")]
    UnsupportedCurrency(String),

    /// The provider could not be consulted; the detail is not exposed.
    #[error("Failed to fetch exchange rates. Please try again later.")]
    RatesUnavailable,
}

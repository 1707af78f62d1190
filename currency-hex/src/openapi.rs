//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use currency_types::dto::{ConversionResult, ConvertQuery};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/api/currency/convert",
    tag = "currency",
    params(
        ("from" = Option<String>, Query, description = "Base currency code (3-letter, case-insensitive)"),
        ("to" = Option<String>, Query, description = "Target currency code (3-letter, case-insensitive)"),
        ("amount" = Option<String>, Query, description = "Amount to convert; must be a positive number"),
    ),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResult),
        (status = 400, description = "Missing parameters, invalid amount, or unsupported target currency"),
        (status = 503, description = "Exchange-rate provider unavailable")
    )
)]
async fn convert() {}

/// OpenAPI document for the Currency Conversion API.
#[derive(OpenApi)]
#[openapi(
    paths(health, convert),
    components(schemas(ConversionResult, ConvertQuery)),
    tags(
        (name = "currency", description = "Currency conversion"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use currency_types::{ConversionError, ConvertQuery, RateProvider};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConversionService<P>,
}

/// Wrapper to implement IntoResponse for ConversionError (orphan rule workaround).
pub struct ApiError(pub ConversionError);

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ConversionError::MissingParameters
            | ConversionError::InvalidAmount
            | ConversionError::UnsupportedCurrency(_) => StatusCode::BAD_REQUEST,
            ConversionError::RatesUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = serde_json::json!({ "error": self.0.to_string() });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount from one currency to another.
#[tracing::instrument(skip(state))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<ConvertQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.convert(query).await?;
    Ok(Json(result))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::menu::StoreError;

/// Response type for health check endpoint
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Error type for page handlers
///
/// Store and render failures collapse into a bare 500 so nothing about the
/// database leaks into the page; the detail goes to the log instead.
#[derive(Debug)]
pub enum ApiError {
    /// Repository failure, including malformed link identifiers
    Store(StoreError),
    /// Template rendering failure
    Render(askama::Error),
    /// Submitted weight is not an integer
    InvalidWeight(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(err) => {
                tracing::error!("Menu store error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::Render(err) => {
                tracing::error!("Template render error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::InvalidWeight(weight) => {
                tracing::info!("Rejected menu link with weight '{}'", weight);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid weight: expected a whole number, got '{}'", weight),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::Render(err)
    }
}

//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::SupabaseError;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unauthorized access
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request with message
    #[error("{0}")]
    BadRequest(String),

    /// Signed in, but onboarding is not finished
    #[error("Please complete your profile first.")]
    ProfileIncomplete,

    /// Hosted backend failure, surfaced with the backend's message
    #[error(transparent)]
    Backend(#[from] SupabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": message })),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            ApiError::ProfileIncomplete => (
                StatusCode::FORBIDDEN,
                json!({ "error": message, "redirect_to": "/onboarding" }),
            ),
            ApiError::Backend(err) => (
                StatusCode::from_u16(err.response_status()).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

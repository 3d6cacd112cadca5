//! Custom error types for the authentication service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::SupabaseError;
use serde_json::json;
use thiserror::Error;

/// Message shown when sign-up hits an email that is already registered
pub const ACCOUNT_EXISTS_ERROR: &str =
    "An account with this email already exists. Please sign in instead.";

/// Custom error type for authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing or rejected bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Invalid form input
    #[error("{0}")]
    BadRequest(String),

    /// Sign-up for an email that already has an account
    #[error("{}", ACCOUNT_EXISTS_ERROR)]
    AccountExists,

    /// Hosted backend failure, surfaced with the backend's message
    #[error(transparent)]
    Backend(#[from] SupabaseError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let body = match &self {
            AuthError::AccountExists => json!({
                "error": message,
                "reason": "account_exists",
            }),
            _ => json!({ "error": message }),
        };

        let status = match &self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AuthError::AccountExists => StatusCode::CONFLICT,
            AuthError::Backend(err) => StatusCode::from_u16(err.response_status())
                .unwrap_or(StatusCode::BAD_GATEWAY),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;

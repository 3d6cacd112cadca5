//! Custom error types for the common library
//!
//! Every failure of a call to the hosted backend ends up here. The message
//! carried by [`SupabaseError::Api`] is the backend's own text and is meant
//! to be shown to the user as is.

use thiserror::Error;

/// Fixed message surfaced whenever the backend URL or public key is missing
pub const MISSING_SUPABASE_ENV_ERROR: &str =
    "Missing Supabase env. Set SUPABASE_URL and SUPABASE_ANON_KEY.";

/// Custom error type for hosted backend operations
#[derive(Error, Debug)]
pub enum SupabaseError {
    /// Backend URL or public key not configured
    #[error("{}", MISSING_SUPABASE_ENV_ERROR)]
    NotConfigured,

    /// Error occurred while talking to the backend
    #[error("Backend connection error: {0}")]
    Http(#[source] reqwest::Error),

    /// The backend answered with an error payload
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The backend answered with a body we could not read
    #[error("Backend response error: {0}")]
    Decode(String),

    /// Bearer token rejected before reaching the backend
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

impl SupabaseError {
    /// Build an API error from a status code and the raw response body
    ///
    /// The auth endpoints report errors under `msg` or `error_description`,
    /// the table endpoints under `message`. Falls back to the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["msg", "message", "error_description", "error"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
            })
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    body.trim().to_string()
                }
            });

        SupabaseError::Api { status, message }
    }

    /// HTTP status reported by the backend, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            SupabaseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Status to answer our own clients with
    ///
    /// Client errors reported by the backend pass through; anything else
    /// the backend fails with becomes a bad gateway.
    pub fn response_status(&self) -> u16 {
        match self {
            SupabaseError::NotConfigured => 503,
            SupabaseError::Api { status, .. } if (400..500).contains(status) => *status,
            SupabaseError::InvalidToken(_) => 401,
            SupabaseError::Api { .. } | SupabaseError::Http(_) | SupabaseError::Decode(_) => 502,
        }
    }
}

impl From<reqwest::Error> for SupabaseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SupabaseError::Decode(err.to_string())
        } else {
            SupabaseError::Http(err)
        }
    }
}

/// Type alias for Result with SupabaseError
pub type SupabaseResult<T> = Result<T, SupabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_message_is_extracted() {
        let err = SupabaseError::from_response(
            400,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_legacy_oauth_error_uses_description() {
        let err = SupabaseError::from_response(
            400,
            r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#,
        );
        assert_eq!(err.to_string(), "Email not confirmed");
    }

    #[test]
    fn test_rest_error_message_is_extracted() {
        let err = SupabaseError::from_response(
            403,
            r#"{"code":"42501","message":"new row violates row-level security policy","details":null,"hint":null}"#,
        );
        assert_eq!(err.to_string(), "new row violates row-level security policy");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        assert_eq!(
            SupabaseError::from_response(502, "Bad Gateway").to_string(),
            "Bad Gateway"
        );
        assert_eq!(
            SupabaseError::from_response(500, "").to_string(),
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_response_status() {
        assert_eq!(SupabaseError::NotConfigured.response_status(), 503);
        assert_eq!(SupabaseError::from_response(422, "{}").response_status(), 422);
        assert_eq!(SupabaseError::from_response(500, "{}").response_status(), 502);
        assert_eq!(
            SupabaseError::InvalidToken("expired".to_string()).response_status(),
            401
        );
    }

    #[test]
    fn test_not_configured_message() {
        assert_eq!(
            SupabaseError::NotConfigured.to_string(),
            MISSING_SUPABASE_ENV_ERROR
        );
    }
}

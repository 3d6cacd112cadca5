//! Local verification of backend-issued access tokens
//!
//! When the project's JWT secret is configured, bearer tokens can be
//! checked (signature, expiry, audience) before any backend round-trip.
//! The backend stays the authority on who the user is.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SupabaseError, SupabaseResult};

const AUDIENCE: &str = "authenticated";

/// Claims carried by a backend access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Expiration time
    pub exp: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// HS256 verifier keyed by the project's JWT secret
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a new verifier from the shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_audience(&[AUDIENCE]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validate a token and return the claims
    pub fn verify(&self, token: &str) -> SupabaseResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| SupabaseError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn token(secret: &str, exp: u64, aud: &str) -> String {
        let claims = json!({
            "sub": "9b2f6d1e-3c4a-4f5b-8e7d-1a2b3c4d5e6f",
            "aud": aud,
            "exp": exp,
            "email": "ada@example.com",
            "role": "authenticated",
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token() {
        let verifier = TokenVerifier::new(SECRET);
        let claims = verifier
            .verify(&token(SECRET, now() + 3600, AUDIENCE))
            .unwrap();
        assert_eq!(claims.sub.to_string(), "9b2f6d1e-3c4a-4f5b-8e7d-1a2b3c4d5e6f");
        assert_eq!(claims.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_rejects_wrong_secret_expiry_and_audience() {
        let verifier = TokenVerifier::new(SECRET);
        let other = "another-secret-jwt-token-with-at-least-32-characters";

        assert!(verifier.verify(&token(other, now() + 3600, AUDIENCE)).is_err());
        assert!(verifier.verify(&token(SECRET, now() - 3600, AUDIENCE)).is_err());
        assert!(verifier.verify(&token(SECRET, now() + 3600, "anon")).is_err());
        assert!(verifier.verify("not-a-token").is_err());
    }
}

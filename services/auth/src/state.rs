//! Application state shared across handlers

use common::{
    error::SupabaseError,
    supabase::{SupabaseClient, SupabaseConfig},
    token::TokenVerifier,
};
use tracing::warn;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Backend client, absent when the backend is not configured
    pub supabase: Option<SupabaseClient>,
    pub token_verifier: Option<TokenVerifier>,
}

impl AppState {
    /// Build the state from an optional backend configuration
    pub fn new(config: Option<SupabaseConfig>) -> Result<Self, SupabaseError> {
        let Some(config) = config else {
            warn!("Supabase is not configured; backend endpoints will report it");
            return Ok(Self {
                supabase: None,
                token_verifier: None,
            });
        };

        Ok(Self {
            supabase: Some(SupabaseClient::new(&config)?),
            token_verifier: config.jwt_secret.as_deref().map(TokenVerifier::new),
        })
    }

    /// Backend client, or the configuration error
    pub fn backend(&self) -> Result<&SupabaseClient, SupabaseError> {
        self.supabase.as_ref().ok_or(SupabaseError::NotConfigured)
    }
}

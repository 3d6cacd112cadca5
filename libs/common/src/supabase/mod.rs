//! Hosted backend client
//!
//! Thin wrapper over the Supabase HTTP endpoints: the auth API under
//! `/auth/v1` and the table API under `/rest/v1`. No retries and no token
//! refresh happen here; a failed call is returned to the caller as is.

pub mod auth;
pub mod rest;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::env;
use tracing::{error, info};

use crate::error::{SupabaseError, SupabaseResult};

const CLIENT_INFO: &str = concat!("sharelocal-common/", env!("CARGO_PKG_VERSION"));

/// Hosted backend configuration
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g., "https://xyzcompany.supabase.co")
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
    /// JWT secret, when bearer tokens should be verified locally
    pub jwt_secret: Option<String>,
}

impl SupabaseConfig {
    /// Create a new SupabaseConfig
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            jwt_secret: None,
        }
    }

    /// Create a new SupabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SUPABASE_URL` (or `NEXT_PUBLIC_SUPABASE_URL`): project URL
    /// - `SUPABASE_ANON_KEY` (or `NEXT_PUBLIC_SUPABASE_ANON_KEY`): public key
    /// - `SUPABASE_JWT_SECRET`: optional, enables local token verification
    ///
    /// Returns [`SupabaseError::NotConfigured`] when the URL or key is absent.
    pub fn from_env() -> SupabaseResult<Self> {
        let url = first_env(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])
            .ok_or(SupabaseError::NotConfigured)?;
        let anon_key = first_env(&["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"])
            .ok_or(SupabaseError::NotConfigured)?;

        let mut config = Self::new(url, anon_key);
        config.jwt_secret = first_env(&["SUPABASE_JWT_SECRET"]);
        Ok(config)
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Client for the hosted backend
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    url: String,
    anon_key: String,
    http: Client,
}

impl SupabaseClient {
    /// Initialize a new client
    pub fn new(config: &SupabaseConfig) -> SupabaseResult<Self> {
        let http = Client::builder()
            .user_agent(CLIENT_INFO)
            .build()
            .map_err(SupabaseError::Http)?;

        info!("Supabase client initialized with URL: {}", config.url);

        Ok(Self {
            url: config.url.clone(),
            anon_key: config.anon_key.clone(),
            http,
        })
    }

    /// Public key the client was built with
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    /// Start a request carrying the project key
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
            .header("X-Client-Info", CLIENT_INFO)
    }

    /// Send a request and decode the JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> SupabaseResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = SupabaseError::from_response(status.as_u16(), &body);
            error!("Backend request failed ({}): {}", status, err);
            return Err(err);
        }

        Ok(response.json::<T>().await?)
    }

    /// Send a request whose body is not needed
    async fn send_empty(&self, request: RequestBuilder) -> SupabaseResult<()> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = SupabaseError::from_response(status.as_u16(), &body);
            error!("Backend request failed ({}): {}", status, err);
            return Err(err);
        }

        Ok(())
    }

    /// Check backend reachability through the auth health endpoint
    pub async fn health_check(&self) -> SupabaseResult<bool> {
        self.send_empty(self.request(Method::GET, "/auth/v1/health"))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "SUPABASE_URL",
        "NEXT_PUBLIC_SUPABASE_URL",
        "SUPABASE_ANON_KEY",
        "NEXT_PUBLIC_SUPABASE_ANON_KEY",
        "SUPABASE_JWT_SECRET",
    ];

    fn clear_env() {
        for name in VARS {
            unsafe { env::remove_var(name) };
        }
    }

    #[test]
    #[serial]
    fn test_config_missing_env() {
        clear_env();
        assert!(matches!(
            SupabaseConfig::from_env(),
            Err(SupabaseError::NotConfigured)
        ));

        unsafe { env::set_var("SUPABASE_URL", "https://project.supabase.co") };
        assert!(matches!(
            SupabaseConfig::from_env(),
            Err(SupabaseError::NotConfigured)
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_fallback_names() {
        clear_env();
        unsafe {
            env::set_var("NEXT_PUBLIC_SUPABASE_URL", "https://project.supabase.co/");
            env::set_var("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon");
        }

        let config = SupabaseConfig::from_env().expect("config should load");
        assert_eq!(config.url, "https://project.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert!(config.jwt_secret.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_env_counts_as_missing() {
        clear_env();
        unsafe {
            env::set_var("SUPABASE_URL", "   ");
            env::set_var("SUPABASE_ANON_KEY", "anon");
        }
        assert!(SupabaseConfig::from_env().is_err());
        clear_env();
    }
}

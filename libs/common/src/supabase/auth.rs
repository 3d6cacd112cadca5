//! Auth API calls (`/auth/v1`)

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::SupabaseClient;
use crate::{
    error::SupabaseResult,
    user::{User, UserAttributes},
};

/// Session issued by the backend after a successful sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

/// Sign-up response
///
/// With email confirmation enabled the backend returns the bare user,
/// otherwise it signs the user in right away and returns a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(Session),
    User(User),
}

impl SignUpResponse {
    /// User the sign-up created or matched
    pub fn user(&self) -> &User {
        match self {
            SignUpResponse::Session(session) => &session.user,
            SignUpResponse::User(user) => user,
        }
    }

    /// Whether the email belongs to an account that already exists
    ///
    /// The backend hides existing accounts behind a fake user whose
    /// identity list is present but empty.
    pub fn is_existing_account(&self) -> bool {
        matches!(&self.user().identities, Some(identities) if identities.is_empty())
    }
}

impl SupabaseClient {
    /// Sign in a user with email and password
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> SupabaseResult<Session> {
        let request = self
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));

        self.send(request).await
    }

    /// Sign up a new user with email and password
    pub async fn sign_up(&self, email: &str, password: &str) -> SupabaseResult<SignUpResponse> {
        let request = self
            .request(Method::POST, "/auth/v1/signup")
            .json(&json!({ "email": email, "password": password }));

        self.send(request).await
    }

    /// Get the user owning an access token
    pub async fn get_user(&self, access_token: &str) -> SupabaseResult<User> {
        let request = self
            .request(Method::GET, "/auth/v1/user")
            .bearer_auth(access_token);

        self.send(request).await
    }

    /// Update the user owning an access token
    pub async fn update_user(
        &self,
        access_token: &str,
        attributes: &UserAttributes,
    ) -> SupabaseResult<User> {
        let request = self
            .request(Method::PUT, "/auth/v1/user")
            .bearer_auth(access_token)
            .json(attributes);

        self.send(request).await
    }

    /// Revoke the session behind an access token
    pub async fn sign_out(&self, access_token: &str) -> SupabaseResult<()> {
        let request = self
            .request(Method::POST, "/auth/v1/logout")
            .bearer_auth(access_token);

        self.send_empty(request).await
    }
}

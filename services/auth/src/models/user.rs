//! User-facing request and response payloads

use common::{profile::Profile, user::User};
use serde::{Deserialize, Serialize};

/// Email and password submitted by the sign-in and sign-up forms
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Profile values submitted by the onboarding and profile forms
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
}

/// Profile as shown on the onboarding and profile pages
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub email: Option<String>,
    pub full_name: String,
    pub city: String,
    pub phone: String,
    pub profile_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

impl ProfileResponse {
    pub fn from_user(user: &User) -> Self {
        let profile = Profile::from_metadata(&user.user_metadata);
        let profile_complete = profile.is_complete();

        Self {
            email: user.email.clone(),
            full_name: profile.full_name,
            city: profile.city,
            phone: profile.phone,
            profile_complete,
            message: None,
            redirect_to: None,
        }
    }
}

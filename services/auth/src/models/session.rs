//! Session payloads

use common::{
    profile::{Avatar, display_name, has_completed_profile, landing_path},
    supabase::auth::Session,
    user::User,
};
use serde::Serialize;
use uuid::Uuid;

/// Signed-in user as shown in the site header
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub id: Uuid,
    pub email: Option<String>,
    pub display_name: String,
    pub avatar: Avatar,
    pub profile_complete: bool,
    pub redirect_to: String,
}

impl SessionUserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            display_name: display_name(user),
            avatar: Avatar::for_user(user),
            profile_complete: has_completed_profile(Some(user)),
            redirect_to: landing_path(user).to_string(),
        }
    }
}

/// Response for a successful sign-in
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    pub redirect_to: String,
    pub user: SessionUserResponse,
}

impl LoginResponse {
    pub fn new(session: Session, user: &User, redirect_to: &str) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            expires_at: session.expires_at,
            redirect_to: redirect_to.to_string(),
            user: SessionUserResponse::from_user(user),
        }
    }
}

/// Response for a successful sign-up
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub message: String,
    pub user_id: Uuid,
}

//! Sign-in and sign-up flows
//!
//! Each flow checks the backend is configured, validates its input, makes the backend calls in order and
//! turns the first failure into the message the user gets to see.

use common::{
    error::SupabaseError,
    profile::landing_path,
    supabase::{SupabaseClient, auth::Session},
    user::User,
};
use tracing::info;

use crate::{
    error::{AuthError, AuthResult},
    validation::{validate_email, validate_login_password, validate_new_password},
};

/// Message shown after a successful sign-up
pub const ACCOUNT_CREATED_MESSAGE: &str =
    "Account created! Check your email to confirm, then sign in.";

/// Result of a successful sign-in
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub session: Session,
    /// User as fetched right after signing in
    pub user: User,
    /// `/home` for a completed profile, `/onboarding` otherwise
    pub redirect_to: &'static str,
}

/// Sign in with email and password, then pick the landing page
pub async fn sign_in(
    client: Option<&SupabaseClient>,
    email: &str,
    password: &str,
) -> AuthResult<SignedIn> {
    let client = client.ok_or(SupabaseError::NotConfigured)?;

    let email = email.trim();
    validate_email(email).map_err(AuthError::BadRequest)?;
    validate_login_password(password).map_err(AuthError::BadRequest)?;

    let session = client.sign_in_with_password(email, password).await?;
    let user = client.get_user(&session.access_token).await?;
    let redirect_to = landing_path(&user);

    info!("User {} signed in, redirecting to {}", user.id, redirect_to);

    Ok(SignedIn {
        session,
        user,
        redirect_to,
    })
}

/// Register a new account with email and password
///
/// The account still has to be confirmed by email, so no session is kept.
pub async fn sign_up(
    client: Option<&SupabaseClient>,
    email: &str,
    password: &str,
) -> AuthResult<User> {
    let client = client.ok_or(SupabaseError::NotConfigured)?;

    let email = email.trim();
    validate_email(email).map_err(AuthError::BadRequest)?;
    validate_new_password(password).map_err(AuthError::BadRequest)?;

    let response = client.sign_up(email, password).await?;
    if response.is_existing_account() {
        info!("Sign-up for an already registered email");
        return Err(AuthError::AccountExists);
    }

    let user = response.user().clone();
    info!("Account {} created", user.id);

    Ok(user)
}

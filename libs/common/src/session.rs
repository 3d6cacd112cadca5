//! Resolving the user behind a bearer token

use tracing::warn;

use crate::{
    error::{SupabaseError, SupabaseResult},
    supabase::SupabaseClient,
    token::TokenVerifier,
    user::User,
};

/// Signed-in user together with the token the request carried
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub access_token: String,
}

/// Look up the user owning `access_token`
///
/// With a verifier configured, forged or expired tokens are rejected
/// locally; the backend is still asked for the user so that metadata is
/// current. A token the backend refuses (401 or 403) is reported as
/// [`SupabaseError::InvalidToken`].
pub async fn authenticate(
    client: &SupabaseClient,
    verifier: Option<&TokenVerifier>,
    access_token: &str,
) -> SupabaseResult<CurrentUser> {
    if let Some(verifier) = verifier {
        verifier.verify(access_token).inspect_err(|e| {
            warn!("Rejected bearer token: {}", e);
        })?;
    }

    let user = client
        .get_user(access_token)
        .await
        .map_err(|e| match e {
            SupabaseError::Api {
                status: 401 | 403,
                message,
            } => SupabaseError::InvalidToken(message),
            other => other,
        })?;

    Ok(CurrentUser {
        user,
        access_token: access_token.to_string(),
    })
}

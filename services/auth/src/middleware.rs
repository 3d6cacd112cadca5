//! Middleware resolving the bearer token to a backend user

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use common::session::authenticate;

use crate::{error::AuthError, state::AppState};

/// Authentication middleware
///
/// Inserts the [`common::session::CurrentUser`] into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let client = state.backend()?;

    let bearer = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or(AuthError::Unauthorized)?;

    let current = authenticate(client, state.token_verifier.as_ref(), bearer.token()).await?;

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

//! Authentication middleware for bearer token validation

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use common::session::authenticate;
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let client = state.backend()?;

    // Extract the bearer token
    let bearer = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or(ApiError::Unauthorized)?;

    let current = authenticate(client, state.token_verifier.as_ref(), bearer.token())
        .await
        .inspect_err(|e| error!("Failed to authenticate request: {}", e))?;

    // Insert the user into the request extensions
    req.extensions_mut().insert(current);

    // Call the next service
    Ok(next.run(req).await)
}

//! Authentication service routes

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use common::{
    profile::{ProfileInput, landing_path},
    session::CurrentUser,
    user::UserAttributes,
};
use serde_json::json;
use tracing::{error, info};

use crate::{
    AppState,
    error::{AuthError, AuthResult},
    flow::{self, ACCOUNT_CREATED_MESSAGE},
    middleware::auth_middleware,
    models::{
        LoginCredentials, LoginResponse, ProfileResponse, ProfileUpdateRequest, RegisterResponse,
        SessionUserResponse,
    },
};

/// Message shown after the profile was saved
pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated.";

/// Create the router for the authentication service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(current_user))
        .route("/profile", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "auth-service",
        "backend_configured": state.supabase.is_some(),
    }))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginCredentials>,
) -> AuthResult<impl IntoResponse> {
    info!("Login attempt");

    let signed_in = flow::sign_in(state.supabase.as_ref(), &payload.email, &payload.password)
        .await
        .inspect_err(|e| error!("Login failed: {}", e))?;

    let response = LoginResponse::new(signed_in.session, &signed_in.user, signed_in.redirect_to);

    Ok((StatusCode::OK, Json(response)))
}

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<LoginCredentials>,
) -> AuthResult<impl IntoResponse> {
    info!("Registration attempt");

    let user = flow::sign_up(state.supabase.as_ref(), &payload.email, &payload.password)
        .await
        .inspect_err(|e| error!("Registration failed: {}", e))?;

    let response = RegisterResponse {
        status: "created",
        message: ACCOUNT_CREATED_MESSAGE.to_string(),
        user_id: user.id,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Logout endpoint
pub async fn logout(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<impl IntoResponse> {
    info!("Logout request for user: {}", current.user.id);

    state.backend()?.sign_out(&current.access_token).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Logged out successfully",
            "redirect_to": "/",
        })),
    ))
}

/// Signed-in user for the site header
pub async fn current_user(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    Json(SessionUserResponse::from_user(&current.user))
}

/// Profile of the signed-in user
pub async fn get_profile(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    let mut response = ProfileResponse::from_user(&current.user);
    response.redirect_to = Some(landing_path(&current.user).to_string());
    Json(response)
}

/// Save the profile and mark it complete
///
/// Serves both the onboarding form and the profile edit form.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> AuthResult<impl IntoResponse> {
    let input = ProfileInput::normalized(&payload.full_name, &payload.city, &payload.phone)
        .map_err(AuthError::BadRequest)?;

    let attributes = UserAttributes {
        data: Some(input.merge_into(&current.user.user_metadata)),
    };

    let user = state
        .backend()?
        .update_user(&current.access_token, &attributes)
        .await
        .inspect_err(|e| error!("Failed to update profile: {}", e))?;

    info!("Profile updated for user: {}", user.id);

    let mut response = ProfileResponse::from_user(&user);
    response.message = Some(PROFILE_UPDATED_MESSAGE.to_string());
    response.redirect_to = Some("/home".to_string());

    Ok(Json(response))
}

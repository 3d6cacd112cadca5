//! API service routes

use axum::{
    Extension, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use common::{profile::has_completed_profile, session::CurrentUser};
use serde_json::json;
use tracing::{error, info};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    filter::ListingFilter,
    middleware::auth_middleware,
    models::listing::{CreateListingRequest, ListingListResponse, ListingQuery, ListingResponse},
    repositories::Feed,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/listings", post(create_listing))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/home", get(get_home_feed))
        .route("/listings", get(get_listings))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api-service",
        "backend_configured": state.supabase.is_some(),
    }))
}

async fn filtered_feed(
    state: &AppState,
    feed: Feed,
    filter: ListingFilter,
) -> ApiResult<ListingListResponse> {
    let listings = state.listings()?.get_feed(feed).await.map_err(|e| {
        error!("Failed to get {:?} feed: {}", feed, e);
        ApiError::from(e)
    })?;

    let items: Vec<ListingResponse> = filter
        .apply(listings)
        .into_iter()
        .map(ListingResponse::from)
        .collect();

    Ok(ListingListResponse {
        total: items.len(),
        items,
    })
}

/// Active listings with search, type and category filters
pub async fn get_home_feed(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = ListingFilter::from_query(&query).map_err(ApiError::BadRequest)?;
    Ok(Json(filtered_feed(&state, Feed::Home, filter).await?))
}

/// Available listings with search and type filters
pub async fn get_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = ListingFilter::from_query(&query)
        .map_err(ApiError::BadRequest)?
        .without_category();
    Ok(Json(filtered_feed(&state, Feed::Browse, filter).await?))
}

/// Create a listing owned by the signed-in user
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<CreateListingRequest>,
) -> ApiResult<impl IntoResponse> {
    if !has_completed_profile(Some(&current.user)) {
        return Err(ApiError::ProfileIncomplete);
    }

    let new_listing = payload
        .into_new_listing(current.user.id)
        .map_err(ApiError::BadRequest)?;

    let listing = state
        .listings()?
        .create(&new_listing, &current.access_token)
        .await
        .map_err(|e| {
            error!("Failed to create listing: {}", e);
            ApiError::from(e)
        })?;

    info!("Listing {} published", listing.id);

    Ok((StatusCode::CREATED, Json(ListingResponse::from(listing))))
}

//! Listings service for ShareLocal
//!
//! Serves the home and browse feeds and publishes new listings through the
//! hosted backend's table API.

pub mod error;
pub mod filter;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use state::AppState;

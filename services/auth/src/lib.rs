//! Authentication service for ShareLocal
//!
//! Sign-in, sign-up and profile onboarding on top of the hosted backend's
//! auth API.

pub mod error;
pub mod flow;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

pub use state::AppState;

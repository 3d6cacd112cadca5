//! Common library for the ShareLocal application
//!
//! This crate provides shared functionality used across the services:
//! the hosted backend client and its configuration, error handling, the
//! auth user model, and the profile-completeness rules.
//!
//! ```rust,no_run
//! use common::supabase::{SupabaseClient, SupabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SupabaseConfig::from_env()?;
//!     let client = SupabaseClient::new(&config)?;
//!     let is_healthy = client.health_check().await?;
//!     println!("Backend health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod profile;
pub mod server;
pub mod session;
pub mod supabase;
pub mod token;
pub mod user;

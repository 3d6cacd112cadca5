//! Authentication service models

pub mod session;
pub mod user;

// Re-export for convenience
pub use session::{LoginResponse, RegisterResponse, SessionUserResponse};
pub use user::{LoginCredentials, ProfileResponse, ProfileUpdateRequest};

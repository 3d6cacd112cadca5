//! Repositories for backend table operations

pub mod listing;

pub use listing::{Feed, ListingRepository};

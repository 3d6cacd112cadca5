//! Listing repository for backend table operations

use common::{
    error::SupabaseResult,
    supabase::{SupabaseClient, rest::SelectQuery},
};
use tracing::info;

use crate::models::listing::{Listing, ListingStatus, NewListing};

const LISTINGS_TABLE: &str = "listings";

const LISTING_COLUMNS: [&str; 10] = [
    "id",
    "title",
    "description",
    "category",
    "type",
    "price_amount",
    "price_unit",
    "status",
    "created_at",
    "owner_id",
];

/// Listing feeds shown to browsing users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Landing page after sign-in
    Home,
    /// Listings browse page
    Browse,
}

impl Feed {
    /// Status of the listings the feed shows
    pub fn status(&self) -> ListingStatus {
        match self {
            Feed::Home => ListingStatus::Active,
            Feed::Browse => ListingStatus::Available,
        }
    }

    /// Maximum number of listings fetched
    pub fn limit(&self) -> usize {
        match self {
            Feed::Home => 100,
            Feed::Browse => 50,
        }
    }

    fn query(&self) -> SelectQuery {
        SelectQuery::new()
            .select(&LISTING_COLUMNS)
            .eq("status", self.status().as_str())
            .order("created_at", false)
            .limit(self.limit())
    }
}

/// Listing repository for backend table operations
#[derive(Clone)]
pub struct ListingRepository {
    client: SupabaseClient,
}

impl ListingRepository {
    /// Create a new listing repository
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Get the newest listings of a feed
    pub async fn get_feed(&self, feed: Feed) -> SupabaseResult<Vec<Listing>> {
        let listings: Vec<Listing> = self
            .client
            .select(LISTINGS_TABLE, &feed.query(), None)
            .await?;

        info!("Fetched {} listings for {:?} feed", listings.len(), feed);
        Ok(listings)
    }

    /// Insert a listing on behalf of the signed-in owner
    pub async fn create(&self, listing: &NewListing, access_token: &str) -> SupabaseResult<Listing> {
        let created: Listing = self
            .client
            .insert(LISTINGS_TABLE, listing, access_token)
            .await?;

        info!("Listing {} created by {}", created.id, listing.owner_id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_queries() {
        let home = Feed::Home.query().to_pairs();
        assert!(home.contains(&("status".to_string(), "eq.active".to_string())));
        assert!(home.contains(&("limit".to_string(), "100".to_string())));
        assert!(home.contains(&("order".to_string(), "created_at.desc".to_string())));

        let browse = Feed::Browse.query().to_pairs();
        assert!(browse.contains(&("status".to_string(), "eq.available".to_string())));
        assert!(browse.contains(&("limit".to_string(), "50".to_string())));
    }
}

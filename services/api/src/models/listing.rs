//! Listing models for the API service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listing kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Free,
    Rental,
}

/// Rental price period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    Day,
    Week,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Day => "day",
            PriceUnit::Week => "week",
        }
    }
}

/// Listing status as stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Available,
    Reserved,
    Closed,
    Paused,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Available => "available",
            ListingStatus::Reserved => "reserved",
            ListingStatus::Closed => "closed",
            ListingStatus::Paused => "paused",
        }
    }
}

/// Listing row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(default)]
    pub price_amount: Option<f64>,
    #[serde(default)]
    pub price_unit: Option<PriceUnit>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

impl Listing {
    /// Price as shown on a listing card
    pub fn price_label(&self) -> String {
        match self.listing_type {
            ListingType::Free => "Free".to_string(),
            ListingType::Rental => format!(
                "{}/{}",
                self.price_amount
                    .map(|amount| amount.to_string())
                    .unwrap_or_else(|| "?".to_string()),
                self.price_unit.map(|unit| unit.as_str()).unwrap_or("?"),
            ),
        }
    }
}

/// Row inserted by the create-listing form
#[derive(Debug, Clone, Serialize)]
pub struct NewListing {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<PriceUnit>,
    pub status: ListingStatus,
}

/// Request for listing creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default)]
    pub listing_type: ListingType,
    #[serde(default)]
    pub price_amount: Option<f64>,
    #[serde(default)]
    pub price_unit: Option<PriceUnit>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl CreateListingRequest {
    /// Clean up the submitted form into the row to insert
    ///
    /// Blank optional text becomes null; new listings start out active.
    pub fn into_new_listing(self, owner_id: Uuid) -> Result<NewListing, String> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err("Title is required.".to_string());
        }

        if self.listing_type == ListingType::Free
            && (self.price_amount.is_some() || self.price_unit.is_some())
        {
            return Err("Free listings cannot have a price.".to_string());
        }

        if let Some(amount) = self.price_amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err("Price must be a non-negative number.".to_string());
            }
        }

        Ok(NewListing {
            owner_id,
            title,
            description: non_blank(self.description.as_deref()),
            category: non_blank(self.category.as_deref()),
            listing_type: self.listing_type,
            price_amount: self.price_amount,
            price_unit: self.price_unit,
            status: ListingStatus::Active,
        })
    }
}

/// Listing with its display price
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    #[serde(flatten)]
    pub listing: Listing,
    pub price_label: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let price_label = listing.price_label();
        Self {
            listing,
            price_label,
        }
    }
}

/// Query parameters for the listing feeds
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    /// Search term matched against title, description and category
    pub q: Option<String>,
    /// `all`, `free` or `rental`
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    /// `all` or a category name
    pub category: Option<String>,
}

/// Response for a listing feed
#[derive(Debug, Clone, Serialize)]
pub struct ListingListResponse {
    pub items: Vec<ListingResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(listing_type: &str, amount: Option<f64>, unit: Option<&str>) -> Listing {
        serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "title": "Cordless drill set",
            "type": listing_type,
            "price_amount": amount,
            "price_unit": unit,
            "status": "available",
            "created_at": "2024-05-01T10:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_price_label() {
        assert_eq!(listing("free", None, None).price_label(), "Free");
        assert_eq!(
            listing("rental", Some(50.0), Some("day")).price_label(),
            "50/day"
        );
        assert_eq!(
            listing("rental", Some(12.5), Some("week")).price_label(),
            "12.5/week"
        );
        assert_eq!(listing("rental", None, None).price_label(), "?/?");
    }

    #[test]
    fn test_into_new_listing_trims_and_nulls_blanks() {
        let owner = Uuid::new_v4();
        let request = CreateListingRequest {
            title: "  Drill ".to_string(),
            description: Some("   ".to_string()),
            category: Some(" Tools ".to_string()),
            listing_type: ListingType::Free,
            price_amount: None,
            price_unit: None,
        };

        let row = request.into_new_listing(owner).unwrap();
        assert_eq!(row.title, "Drill");
        assert_eq!(row.description, None);
        assert_eq!(row.category.as_deref(), Some("Tools"));
        assert_eq!(row.status, ListingStatus::Active);
        assert_eq!(row.owner_id, owner);

        let payload = serde_json::to_value(&row).unwrap();
        assert_eq!(payload["type"], "free");
        assert_eq!(payload["status"], "active");
        assert_eq!(payload["description"], serde_json::Value::Null);
        assert!(payload.get("price_amount").is_none());
    }

    #[test]
    fn test_title_is_required() {
        let request: CreateListingRequest =
            serde_json::from_value(json!({ "title": "   " })).unwrap();
        assert_eq!(
            request.into_new_listing(Uuid::new_v4()).unwrap_err(),
            "Title is required."
        );
    }

    #[test]
    fn test_price_only_for_rentals() {
        let free: CreateListingRequest =
            serde_json::from_value(json!({ "title": "Drill", "price_amount": 10 })).unwrap();
        assert!(free.into_new_listing(Uuid::new_v4()).is_err());

        let rental: CreateListingRequest = serde_json::from_value(json!({
            "title": "Drill",
            "type": "rental",
            "price_amount": 10,
            "price_unit": "day"
        }))
        .unwrap();
        let row = rental.into_new_listing(Uuid::new_v4()).unwrap();
        assert_eq!(row.listing_type, ListingType::Rental);
        assert_eq!(row.price_unit, Some(PriceUnit::Day));

        let negative: CreateListingRequest = serde_json::from_value(json!({
            "title": "Drill",
            "type": "rental",
            "price_amount": -1
        }))
        .unwrap();
        assert!(negative.into_new_listing(Uuid::new_v4()).is_err());
    }
}

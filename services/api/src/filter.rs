//! In-memory search over a fetched listing feed

use crate::models::listing::{Listing, ListingQuery, ListingType};

/// Type restriction picked in the feed's dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ListingType),
}

impl TypeFilter {
    /// Parse `all`, `free` or `rental`, ignoring case and the dropdown's
    /// "All Types" label
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "" | "all" | "all types" => Ok(TypeFilter::All),
            "free" => Ok(TypeFilter::Only(ListingType::Free)),
            "rental" => Ok(TypeFilter::Only(ListingType::Rental)),
            other => Err(format!("Unknown listing type: {}", other)),
        }
    }
}

/// Filter applied to a listing feed
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    needle: String,
    listing_type: TypeFilter,
    category: Option<String>,
}

impl ListingFilter {
    /// Build the filter from query parameters
    pub fn from_query(query: &ListingQuery) -> Result<Self, String> {
        let listing_type = query
            .listing_type
            .as_deref()
            .map(TypeFilter::parse)
            .transpose()?
            .unwrap_or_default();

        let category = query
            .category
            .as_deref()
            .map(|category| category.trim().to_lowercase())
            .filter(|category| !matches!(category.as_str(), "" | "all" | "all categories"));

        Ok(Self {
            needle: query
                .q
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            listing_type,
            category,
        })
    }

    /// Same filter without the category restriction
    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        [
            Some(listing.title.as_str()),
            listing.description.as_deref(),
            listing.category.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Whether `listing` passes every part of the filter
    pub fn matches(&self, listing: &Listing) -> bool {
        let matches_type = match self.listing_type {
            TypeFilter::All => true,
            TypeFilter::Only(listing_type) => listing.listing_type == listing_type,
        };

        let matches_category = match &self.category {
            None => true,
            Some(category) => {
                listing.category.as_deref().unwrap_or_default().to_lowercase() == *category
            }
        };

        self.matches_text(listing) && matches_type && matches_category
    }

    /// Keep the listings passing the filter, in feed order
    pub fn apply(&self, listings: Vec<Listing>) -> Vec<Listing> {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn listing(title: &str, description: Option<&str>, category: Option<&str>, kind: &str) -> Listing {
        serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "title": title,
            "description": description,
            "category": category,
            "type": kind,
            "status": "active",
            "created_at": "2024-05-01T10:00:00Z",
        }))
        .unwrap()
    }

    fn feed() -> Vec<Listing> {
        vec![
            listing("Cordless drill", Some("Barely used"), Some("Tools"), "rental"),
            listing("Kids bike", None, Some("Sports"), "free"),
            listing("Sofa", Some("Grey, pick up in Södermalm"), None, "free"),
        ]
    }

    fn filter(q: Option<&str>, kind: Option<&str>, category: Option<&str>) -> ListingFilter {
        ListingFilter::from_query(&ListingQuery {
            q: q.map(str::to_string),
            listing_type: kind.map(str::to_string),
            category: category.map(str::to_string),
        })
        .unwrap()
    }

    fn titles(listings: Vec<Listing>) -> Vec<String> {
        listings.into_iter().map(|listing| listing.title).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter(None, None, None).apply(feed()).len(), 3);
        assert_eq!(filter(Some("   "), Some("all"), Some("all")).apply(feed()).len(), 3);
    }

    #[test]
    fn test_text_matches_title_description_and_category() {
        assert_eq!(titles(filter(Some("DRILL"), None, None).apply(feed())), ["Cordless drill"]);
        assert_eq!(titles(filter(Some(" södermalm "), None, None).apply(feed())), ["Sofa"]);
        assert_eq!(titles(filter(Some("sport"), None, None).apply(feed())), ["Kids bike"]);
        assert!(filter(Some("piano"), None, None).apply(feed()).is_empty());
    }

    #[test]
    fn test_type_filter() {
        assert_eq!(
            titles(filter(None, Some("free"), None).apply(feed())),
            ["Kids bike", "Sofa"]
        );
        assert_eq!(
            titles(filter(None, Some("Rental"), None).apply(feed())),
            ["Cordless drill"]
        );
        assert_eq!(filter(None, Some("All Types"), None).apply(feed()).len(), 3);
        assert!(TypeFilter::parse("swap").is_err());
    }

    #[test]
    fn test_category_is_exact_and_case_insensitive() {
        assert_eq!(
            titles(filter(None, None, Some("tools")).apply(feed())),
            ["Cordless drill"]
        );
        assert!(filter(None, None, Some("Tool")).apply(feed()).is_empty());
        assert_eq!(filter(None, None, Some("All Categories")).apply(feed()).len(), 3);
    }

    #[test]
    fn test_filters_combine() {
        assert!(filter(Some("drill"), Some("free"), None).apply(feed()).is_empty());
        assert_eq!(
            titles(filter(Some("drill"), Some("rental"), Some("tools")).apply(feed())),
            ["Cordless drill"]
        );
        assert_eq!(
            filter(None, None, Some("tools"))
                .without_category()
                .apply(feed())
                .len(),
            3
        );
    }
}

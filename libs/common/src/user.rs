//! Auth user as returned by the hosted backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Free-form metadata map attached to an auth user
pub type UserMetadata = Map<String, Value>;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub app_metadata: UserMetadata,
    /// Linked sign-in identities. The backend returns an empty list on
    /// sign-up when the email is already registered.
    #[serde(default)]
    pub identities: Option<Vec<Identity>>,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// String value stored under `key` in the user metadata
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.user_metadata.get(key).and_then(Value::as_str)
    }
}

/// A sign-in identity linked to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub identity_data: Option<UserMetadata>,
}

/// User update payload
#[derive(Debug, Clone, Serialize, Default)]
pub struct UserAttributes {
    /// Replacement metadata map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UserMetadata>,
}

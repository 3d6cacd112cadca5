//! Profile data kept in the auth user's metadata
//!
//! A profile is "complete" once the full name, city and phone are all
//! filled in and the `profile_completed` flag is set. The check gates
//! onboarding and listing creation; nothing enforces it server-side.

use serde::Serialize;
use serde_json::Value;

use crate::user::{User, UserMetadata};

pub const FULL_NAME_KEY: &str = "full_name";
pub const CITY_KEY: &str = "city";
pub const PHONE_KEY: &str = "phone";
pub const PROFILE_COMPLETED_KEY: &str = "profile_completed";

/// Profile fields read from user metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    pub full_name: String,
    pub city: String,
    pub phone: String,
    pub profile_completed: bool,
}

impl Profile {
    /// Read the profile fields; non-string values count as empty
    pub fn from_metadata(metadata: &UserMetadata) -> Self {
        let text = |key: &str| {
            metadata
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            full_name: text(FULL_NAME_KEY),
            city: text(CITY_KEY),
            phone: text(PHONE_KEY),
            profile_completed: metadata.get(PROFILE_COMPLETED_KEY) == Some(&Value::Bool(true)),
        }
    }

    /// Whether every field is filled in and the completion flag is set
    pub fn is_complete(&self) -> bool {
        self.profile_completed
            && !self.full_name.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

/// Whether `user` has completed onboarding
pub fn has_completed_profile(user: Option<&User>) -> bool {
    user.is_some_and(|user| Profile::from_metadata(&user.user_metadata).is_complete())
}

/// Where a signed-in user should land
pub fn landing_path(user: &User) -> &'static str {
    if has_completed_profile(Some(user)) {
        "/home"
    } else {
        "/onboarding"
    }
}

/// Profile values submitted by the onboarding or profile form
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInput {
    pub full_name: String,
    pub city: String,
    pub phone: String,
}

impl ProfileInput {
    /// Trim every field and reject blank ones
    pub fn normalized(full_name: &str, city: &str, phone: &str) -> Result<Self, String> {
        let input = Self {
            full_name: full_name.trim().to_string(),
            city: city.trim().to_string(),
            phone: phone.trim().to_string(),
        };

        for (label, value) in [
            ("Full name", &input.full_name),
            ("City", &input.city),
            ("Phone", &input.phone),
        ] {
            if value.is_empty() {
                return Err(format!("{} is required.", label));
            }
        }

        Ok(input)
    }

    /// Merge into the current metadata, marking the profile complete
    ///
    /// Keys that do not belong to the profile are kept as they are.
    pub fn merge_into(&self, current: &UserMetadata) -> UserMetadata {
        let mut metadata = current.clone();
        metadata.insert(FULL_NAME_KEY.to_string(), Value::from(self.full_name.as_str()));
        metadata.insert(CITY_KEY.to_string(), Value::from(self.city.as_str()));
        metadata.insert(PHONE_KEY.to_string(), Value::from(self.phone.as_str()));
        metadata.insert(PROFILE_COMPLETED_KEY.to_string(), Value::Bool(true));
        metadata
    }
}

/// Name shown for a user in the header
pub fn display_name(user: &User) -> String {
    ["display_name", FULL_NAME_KEY, "name"]
        .iter()
        .filter_map(|key| user.metadata_str(key))
        .chain(user.email.as_deref())
        .find(|value| !value.is_empty())
        .unwrap_or("User")
        .to_string()
}

/// Letter avatar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Avatar {
    pub letter: String,
    pub background: String,
    pub foreground: String,
}

const AVATAR_SATURATION: u32 = 75;
const AVATAR_LIGHTNESS: u32 = 42;

impl Avatar {
    /// Build an avatar for `name` coloured from a hash of `seed`
    pub fn new(name: &str, seed: &str) -> Self {
        let letter = name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string());

        let hue = seed
            .encode_utf16()
            .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
            % 360;

        let foreground = if AVATAR_LIGHTNESS >= 60 {
            "#111827"
        } else {
            "#ffffff"
        };

        Self {
            letter,
            background: format!("hsl({} {}% {}%)", hue, AVATAR_SATURATION, AVATAR_LIGHTNESS),
            foreground: foreground.to_string(),
        }
    }

    /// Avatar for a user, seeded by email when known
    pub fn for_user(user: &User) -> Self {
        let name = display_name(user);
        let seed = user.email.clone().unwrap_or_else(|| name.clone());
        Self::new(&name, &seed)
    }
}

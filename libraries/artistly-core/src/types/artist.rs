//! Artist types

use crate::types::ArtistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable performer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique artist identifier
    pub id: ArtistId,

    /// Display name
    pub name: String,

    /// Free-text biography
    pub bio: String,

    /// Performance categories (multi-valued, e.g. "Singers", "Bands")
    pub category: Vec<String>,

    /// Languages the artist performs in
    pub languages: Vec<String>,

    /// Fee band label (a bucket, not a number)
    pub fee_range: String,

    /// City the artist is based in
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    /// Average review score, 0 to 5
    pub rating: f32,

    pub review_count: u32,

    pub is_verified: bool,

    pub created_at: DateTime<Utc>,
}

impl Artist {
    /// Build a freshly onboarded artist from a create request.
    ///
    /// Reputation fields start empty and the profile is unverified.
    pub fn from_create(create: CreateArtist) -> Self {
        Self {
            id: ArtistId::generate(),
            name: create.name,
            bio: create.bio,
            category: create.category,
            languages: create.languages,
            fee_range: create.fee_range,
            location: create.location,
            profile_image: create.profile_image,
            rating: 0.0,
            review_count: 0,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    /// URL-friendly slug derived from the display name
    ///
    /// "The Harmony Band" becomes "the-harmony-band".
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Data for creating a new artist (onboarding submission)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtist {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub fee_range: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
        // anything else is dropped without breaking the word
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateArtist {
        CreateArtist {
            name: "Anika Rao".to_string(),
            bio: "Carnatic vocalist".to_string(),
            category: vec!["Singers".to_string()],
            languages: vec!["Tamil".to_string()],
            fee_range: "Under ₹10,000".to_string(),
            location: "Chennai".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn from_create_assigns_server_fields() {
        let artist = Artist::from_create(create_request());

        assert_eq!(artist.name, "Anika Rao");
        assert_eq!(artist.rating, 0.0);
        assert_eq!(artist.review_count, 0);
        assert!(!artist.is_verified);
        assert!(artist.created_at <= Utc::now());
    }

    #[test]
    fn slug_collapses_separators_and_drops_punctuation() {
        assert_eq!(slugify("The Harmony Band"), "the-harmony-band");
        assert_eq!(slugify("  DJ -- Arjun!! "), "dj-arjun");
        assert_eq!(slugify("Rock_n_Roll"), "rock-n-roll");
        assert_eq!(slugify("Kavya's Troupe"), "kavyas-troupe");
    }

    #[test]
    fn artist_serializes_camel_case() {
        let artist = Artist::from_create(create_request());
        let json = serde_json::to_value(&artist).unwrap();

        assert_eq!(json["feeRange"], "Under ₹10,000");
        assert_eq!(json["reviewCount"], 0);
        assert_eq!(json["isVerified"], false);
        assert!(json.get("profileImage").is_none());
    }
}

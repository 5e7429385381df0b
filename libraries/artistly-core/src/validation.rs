//! Submission validation
//!
//! Artist onboarding is a three-stage form. Each stage owns a subset of the
//! fields, and the final submission is checked against all of them. Errors
//! are collected per field rather than failing on the first one.

use crate::types::{Catalog, CreateArtist, CreateBooking};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const BIO_MIN: usize = 50;
const BIO_MAX: usize = 500;
const LOCATION_MIN: usize = 2;

/// Field-level validation failures, keyed by wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first message per field is kept.
    pub fn add(&mut self, field: ArtistField, message: impl Into<String>) {
        self.add_raw(field.as_str(), message);
    }

    fn add_raw(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn retain_fields(&mut self, keep: &[ArtistField]) {
        self.0
            .retain(|field, _| keep.iter().any(|k| k.as_str() == field));
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Onboarding form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtistField {
    Name,
    Bio,
    Location,
    Category,
    Languages,
    FeeRange,
}

impl ArtistField {
    /// Wire (JSON) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistField::Name => "name",
            ArtistField::Bio => "bio",
            ArtistField::Location => "location",
            ArtistField::Category => "category",
            ArtistField::Languages => "languages",
            ArtistField::FeeRange => "feeRange",
        }
    }
}

/// Steps of the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingStage {
    /// Personal details
    BasicInfo,
    /// Skills and pricing
    Performance,
    /// Confirm and submit; checks everything
    Review,
}

impl OnboardingStage {
    pub fn fields(&self) -> &'static [ArtistField] {
        match self {
            OnboardingStage::BasicInfo => {
                &[ArtistField::Name, ArtistField::Bio, ArtistField::Location]
            }
            OnboardingStage::Performance => &[
                ArtistField::Category,
                ArtistField::Languages,
                ArtistField::FeeRange,
            ],
            OnboardingStage::Review => &[
                ArtistField::Name,
                ArtistField::Bio,
                ArtistField::Location,
                ArtistField::Category,
                ArtistField::Languages,
                ArtistField::FeeRange,
            ],
        }
    }

    pub fn next(&self) -> Option<OnboardingStage> {
        match self {
            OnboardingStage::BasicInfo => Some(OnboardingStage::Performance),
            OnboardingStage::Performance => Some(OnboardingStage::Review),
            OnboardingStage::Review => None,
        }
    }
}

/// Validate a complete onboarding submission
pub fn validate_artist(artist: &CreateArtist, catalog: &Catalog) -> Result<(), ValidationErrors> {
    collect_artist_errors(artist, catalog).into_result()
}

/// Validate only the fields owned by one onboarding stage
pub fn validate_stage(
    draft: &CreateArtist,
    stage: OnboardingStage,
    catalog: &Catalog,
) -> Result<(), ValidationErrors> {
    let mut errors = collect_artist_errors(draft, catalog);
    errors.retain_fields(stage.fields());
    errors.into_result()
}

/// Validate a booking submission
///
/// Only structure is checked here; whether the artist exists is up to the
/// caller holding a data source.
pub fn validate_booking(booking: &CreateBooking) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if booking.artist_id.as_str().trim().is_empty() {
        errors.add_raw("artistId", "Please choose an artist");
    }
    errors.into_result()
}

fn collect_artist_errors(artist: &CreateArtist, catalog: &Catalog) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name_len = artist.name.trim().chars().count();
    if name_len < NAME_MIN {
        errors.add(
            ArtistField::Name,
            format!("Name must be at least {NAME_MIN} characters"),
        );
    } else if name_len > NAME_MAX {
        errors.add(
            ArtistField::Name,
            format!("Name must be less than {NAME_MAX} characters"),
        );
    }

    let bio_len = artist.bio.chars().count();
    if bio_len < BIO_MIN {
        errors.add(
            ArtistField::Bio,
            format!("Bio must be at least {BIO_MIN} characters"),
        );
    } else if bio_len > BIO_MAX {
        errors.add(
            ArtistField::Bio,
            format!("Bio must be less than {BIO_MAX} characters"),
        );
    }

    if artist.category.is_empty() {
        errors.add(ArtistField::Category, "Please select at least one category");
    } else if let Some(unknown) = artist.category.iter().find(|c| !catalog.has_category(c)) {
        errors.add(ArtistField::Category, format!("Unknown category: {unknown}"));
    }

    if artist.languages.is_empty() {
        errors.add(ArtistField::Languages, "Please select at least one language");
    } else if let Some(unknown) = artist.languages.iter().find(|l| !catalog.has_language(l)) {
        errors.add(ArtistField::Languages, format!("Unknown language: {unknown}"));
    }

    if artist.fee_range.is_empty() {
        errors.add(ArtistField::FeeRange, "Please select a fee range");
    } else if !catalog.has_fee_range(&artist.fee_range) {
        errors.add(
            ArtistField::FeeRange,
            format!("Unknown fee range: {}", artist.fee_range),
        );
    }

    if artist.location.chars().count() < LOCATION_MIN {
        errors.add(ArtistField::Location, "Please enter your location");
    } else if !catalog.has_location(&artist.location) {
        errors.add(
            ArtistField::Location,
            format!("Unknown location: {}", artist.location),
        );
    }

    errors
}

//! Artist listing and onboarding

use crate::error::{ArtistlyError, Result};
use crate::filter;
use crate::query;
use crate::storage::DataSource;
use crate::types::{Artist, ArtistId, Catalog, CreateArtist, FilterOptions};
use crate::validation::validate_artist;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Filtered artists plus their count
///
/// `total` is always the length of `artists`; the unfiltered size of the
/// collection is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistListing {
    pub artists: Vec<Artist>,
    pub total: usize,
}

impl ArtistListing {
    fn new(artists: Vec<Artist>) -> Self {
        let total = artists.len();
        Self { artists, total }
    }
}

/// Orchestrates the data source, the filter engine and onboarding checks
#[derive(Clone)]
pub struct ListingService {
    source: Arc<dyn DataSource>,
    catalog: Arc<Catalog>,
}

impl ListingService {
    pub fn new(source: Arc<dyn DataSource>, catalog: Arc<Catalog>) -> Self {
        Self { source, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// List artists matching `criteria`, in data source order
    pub async fn list(&self, criteria: &FilterOptions) -> Result<ArtistListing> {
        let candidates = self.source.list_artists().await?;
        let artists = filter::apply(&candidates, criteria);

        tracing::debug!(
            candidates = candidates.len(),
            matched = artists.len(),
            active_filters = criteria.active_count(),
            "Listed artists"
        );

        Ok(ArtistListing::new(artists))
    }

    /// Decode raw query parameters and list the matching artists
    pub async fn list_from_params<I, K, V>(&self, params: I) -> Result<ArtistListing>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let criteria = query::parse(params);
        self.list(&criteria).await
    }

    pub async fn get(&self, id: &ArtistId) -> Result<Artist> {
        self.source
            .get_artist(id)
            .await?
            .ok_or_else(|| ArtistlyError::not_found("Artist", id.as_str()))
    }

    /// Validate an onboarding submission and store the new profile
    pub async fn onboard(&self, create: CreateArtist) -> Result<Artist> {
        validate_artist(&create, &self.catalog)?;

        let mut artist = Artist::from_create(create);
        artist.name = artist.name.trim().to_string();

        let artist = self.source.insert_artist(artist).await?;
        tracing::info!(artist_id = %artist.id, name = %artist.name, "Artist onboarded");

        Ok(artist)
    }
}

/// Artists API routes
use crate::{error::Result, state::AppState};
use artistly_core::{Artist, ArtistId, ArtistListing, CreateArtist};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateArtistResponse {
    pub success: bool,
    pub artist: Artist,
    pub message: &'static str,
}

/// GET /api/artists?category=&location=&priceRange=&search=
/// List artists matching the query filters, in listing order
pub async fn list_artists(
    State(app_state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ArtistListing>> {
    let listing = app_state.listing.list_from_params(params).await?;
    Ok(Json(listing))
}

/// GET /api/artists/:id
pub async fn get_artist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Artist>> {
    let artist = app_state.listing.get(&ArtistId::new(id)).await?;
    Ok(Json(artist))
}

/// POST /api/artists
/// Validate an onboarding submission and create the profile
pub async fn create_artist(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateArtist>, JsonRejection>,
) -> Result<Json<CreateArtistResponse>> {
    let Json(create) = payload?;
    let artist = app_state.listing.onboard(create).await?;

    Ok(Json(CreateArtistResponse {
        success: true,
        artist,
        message: "Artist profile created successfully!",
    }))
}

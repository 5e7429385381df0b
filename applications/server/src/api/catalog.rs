/// Catalog API routes
use crate::state::AppState;
use artistly_core::Catalog;
use axum::{extract::State, Json};

/// GET /api/catalog
/// Selector values for categories, languages, fee ranges and locations
pub async fn get_catalog(State(app_state): State<AppState>) -> Json<Catalog> {
    Json(app_state.listing.catalog().clone())
}

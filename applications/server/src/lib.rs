//! Artistly Server Library
//!
//! HTTP API for the Artistly performer marketplace: artist listings with
//! filters, onboarding, booking requests and the manager dashboard.
//!
//! This library exposes the router and its parts for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ServerConfig, StorageBackend};
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router over `app_state`
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/catalog", get(api::catalog::get_catalog))
        // Artists
        .route(
            "/artists",
            get(api::artists::list_artists).post(api::artists::create_artist),
        )
        .route("/artists/:id", get(api::artists::get_artist))
        // Bookings
        .route(
            "/bookings",
            get(api::bookings::list_bookings).post(api::bookings::create_booking),
        )
        .route("/bookings/stats", get(api::bookings::booking_stats))
        .route("/bookings/:id", patch(api::bookings::update_booking));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

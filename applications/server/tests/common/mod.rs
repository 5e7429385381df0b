//! Common test utilities and fixtures
#![allow(dead_code)]

use artistly_core::{Catalog, DataSource};
use artistly_server::{create_router, AppState};
use artistly_storage::{MemoryDataSource, SqliteDataSource};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;

/// Router over an in-memory store holding the reference dataset
pub fn create_test_app() -> Router {
    let source: Arc<dyn DataSource> = Arc::new(MemoryDataSource::with_reference_data());
    create_router(AppState::new(source, Arc::new(Catalog::default())))
}

/// Router over a seeded SQLite file. Keep the `TempDir` alive for the test.
pub async fn create_sqlite_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("api.db").display());

    let pool = artistly_storage::create_pool(&db_url).await.unwrap();
    artistly_storage::run_migrations(&pool).await.unwrap();
    let source: Arc<dyn DataSource> = Arc::new(SqliteDataSource::new(pool));
    artistly_storage::seed_if_empty(source.as_ref()).await.unwrap();

    let app = create_router(AppState::new(source, Arc::new(Catalog::default())));
    (app, temp_dir)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Test fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn onboarding_submission(name: &str) -> Value {
        json!({
            "name": name,
            "bio": "Sufi and qawwali ensemble performing soulful evenings across North India.",
            "category": ["Musicians", "Singers"],
            "languages": ["Hindi", "Punjabi"],
            "feeRange": "₹25,000 - ₹50,000",
            "location": "Delhi"
        })
    }

    pub fn quote_request(artist_id: &str) -> Value {
        json!({
            "artistId": artist_id,
            "artistName": "Someone Else",
            "eventDate": "2025-03-14",
            "location": "Mumbai",
            "budget": "₹25,000 - ₹50,000",
            "status": "accepted"
        })
    }
}

/// Booking API routes
use crate::{error::Result, state::AppState};
use artistly_core::{BookingId, BookingListing, BookingRequest, BookingStats, BookingStatus, CreateBooking};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub booking: BookingRequest,
    pub message: String,
}

/// GET /api/bookings
pub async fn list_bookings(State(app_state): State<AppState>) -> Result<Json<BookingListing>> {
    let listing = app_state.bookings.list().await?;
    Ok(Json(listing))
}

/// GET /api/bookings/stats
/// Counts by status and the acceptance rate for the manager dashboard
pub async fn booking_stats(State(app_state): State<AppState>) -> Result<Json<BookingStats>> {
    let stats = app_state.bookings.stats().await?;
    Ok(Json(stats))
}

/// POST /api/bookings
/// Submit a quote request; it always starts out pending
pub async fn create_booking(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateBooking>, JsonRejection>,
) -> Result<Json<BookingResponse>> {
    let Json(create) = payload?;
    let booking = app_state.bookings.submit(create).await?;

    Ok(Json(BookingResponse {
        success: true,
        booking,
        message: "Booking request submitted successfully!".to_string(),
    }))
}

/// PATCH /api/bookings/:id
/// Accept or reject a pending request
pub async fn update_booking(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>> {
    let Json(req) = payload?;
    let booking = app_state
        .bookings
        .update_status(&BookingId::new(id), req.status)
        .await?;

    Ok(Json(BookingResponse {
        success: true,
        message: format!("Booking request has been {}.", booking.status),
        booking,
    }))
}

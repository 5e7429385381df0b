//! Booking requests and their lifecycle

use crate::error::{ArtistlyError, Result};
use crate::stats::BookingStats;
use crate::storage::DataSource;
use crate::types::{BookingId, BookingRequest, BookingStatus, CreateBooking};
use crate::validation::validate_booking;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// All booking requests plus their count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingListing {
    pub bookings: Vec<BookingRequest>,
    pub total: usize,
}

/// Accepts quote requests and applies manager decisions
///
/// `accepted` and `rejected` are terminal: once a request has been decided,
/// further status updates fail with `InvalidTransition` and leave the
/// record untouched.
#[derive(Clone)]
pub struct BookingService {
    source: Arc<dyn DataSource>,
}

impl BookingService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub async fn list(&self) -> Result<BookingListing> {
        let bookings = self.source.list_bookings().await?;
        let total = bookings.len();
        Ok(BookingListing { bookings, total })
    }

    pub async fn get(&self, id: &BookingId) -> Result<BookingRequest> {
        self.source
            .get_booking(id)
            .await?
            .ok_or_else(|| ArtistlyError::not_found("Booking", id.as_str()))
    }

    pub async fn stats(&self) -> Result<BookingStats> {
        let bookings = self.source.list_bookings().await?;
        Ok(BookingStats::from_bookings(&bookings))
    }

    /// Record a new request. Always created `pending`.
    ///
    /// The artist must exist; its stored name replaces whatever name the
    /// client sent.
    pub async fn submit(&self, create: CreateBooking) -> Result<BookingRequest> {
        validate_booking(&create)?;

        let artist = self
            .source
            .get_artist(&create.artist_id)
            .await?
            .ok_or_else(|| ArtistlyError::not_found("Artist", create.artist_id.as_str()))?;

        let mut booking = BookingRequest::from_create(create);
        booking.artist_name = artist.name;

        let booking = self.source.insert_booking(booking).await?;
        tracing::info!(
            booking_id = %booking.id,
            artist_id = %booking.artist_id,
            "Booking request submitted"
        );

        Ok(booking)
    }

    /// Apply a manager decision to a pending request
    ///
    /// The pending check happens inside the data source write, so of two
    /// concurrent decisions on one request exactly one succeeds.
    pub async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<BookingRequest> {
        let updated = match self.source.update_booking_status(id, status).await {
            Ok(Some(booking)) => booking,
            Ok(None) => return Err(ArtistlyError::not_found("Booking", id.as_str())),
            Err(err @ ArtistlyError::InvalidTransition { .. }) => {
                tracing::warn!(booking_id = %id, to = %status, "Rejected booking status change: {}", err);
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        tracing::info!(booking_id = %id, status = %status, "Booking status updated");
        Ok(updated)
    }
}

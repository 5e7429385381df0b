//! Data source port

use crate::error::Result;
use crate::types::{Artist, ArtistId, BookingId, BookingRequest, BookingStatus};
use async_trait::async_trait;

/// Backing store for artists and booking requests
///
/// Implementations own persistence plus the atomic pending guard on status
/// writes. Filtering and validation live in the services, so a persistent
/// store can be swapped in without touching them.
#[async_trait]
pub trait DataSource: Send + Sync {
    // ========================================================================
    // Artists
    // ========================================================================

    /// All artists, in insertion order
    async fn list_artists(&self) -> Result<Vec<Artist>>;

    /// Get artist by ID
    async fn get_artist(&self, id: &ArtistId) -> Result<Option<Artist>>;

    /// Append a fully-formed artist
    async fn insert_artist(&self, artist: Artist) -> Result<Artist>;

    // ========================================================================
    // Bookings
    // ========================================================================

    /// All booking requests, in insertion order
    async fn list_bookings(&self) -> Result<Vec<BookingRequest>>;

    /// Get booking request by ID
    async fn get_booking(&self, id: &BookingId) -> Result<Option<BookingRequest>>;

    /// Append a fully-formed booking request
    async fn insert_booking(&self, booking: BookingRequest) -> Result<BookingRequest>;

    /// Move a pending booking request to `status`
    ///
    /// The pending check and the write are one atomic step. Returns the
    /// updated record, `None` when the ID is unknown, and
    /// `ArtistlyError::InvalidTransition` when the request is no longer
    /// pending or `status` is not reachable from pending.
    async fn update_booking_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<Option<BookingRequest>>;
}

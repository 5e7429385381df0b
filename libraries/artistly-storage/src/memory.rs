//! Process-local data source
//!
//! Holds artists and bookings in insertion-ordered vectors behind
//! `tokio::sync::RwLock`. Contents are lost on restart.

use artistly_core::{
    error::{ArtistlyError, Result},
    seed,
    storage::DataSource,
    types::{Artist, ArtistId, BookingId, BookingRequest, BookingStatus},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryDataSource {
    artists: RwLock<Vec<Artist>>,
    bookings: RwLock<Vec<BookingRequest>>,
}

impl MemoryDataSource {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the reference artists and bookings
    pub fn with_reference_data() -> Self {
        Self::with_data(seed::reference_artists(), seed::reference_bookings())
    }

    pub fn with_data(artists: Vec<Artist>, bookings: Vec<BookingRequest>) -> Self {
        Self {
            artists: RwLock::new(artists),
            bookings: RwLock::new(bookings),
        }
    }
}

#[async_trait]
impl DataSource for MemoryDataSource {
    async fn list_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.artists.read().await.clone())
    }

    async fn get_artist(&self, id: &ArtistId) -> Result<Option<Artist>> {
        let artists = self.artists.read().await;
        Ok(artists.iter().find(|a| &a.id == id).cloned())
    }

    async fn insert_artist(&self, artist: Artist) -> Result<Artist> {
        let mut artists = self.artists.write().await;
        if artists.iter().any(|a| a.id == artist.id) {
            return Err(ArtistlyError::storage(format!(
                "Duplicate artist id: {}",
                artist.id
            )));
        }
        artists.push(artist.clone());
        Ok(artist)
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRequest>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Option<BookingRequest>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| &b.id == id).cloned())
    }

    async fn insert_booking(&self, booking: BookingRequest) -> Result<BookingRequest> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(ArtistlyError::storage(format!(
                "Duplicate booking id: {}",
                booking.id
            )));
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<Option<BookingRequest>> {
        let mut bookings = self.bookings.write().await;
        let Some(booking) = bookings.iter_mut().find(|b| &b.id == id) else {
            return Ok(None);
        };

        if !booking.status.can_transition_to(status) {
            return Err(ArtistlyError::InvalidTransition {
                from: booking.status,
                to: status,
            });
        }

        booking.status = status;
        Ok(Some(booking.clone()))
    }
}

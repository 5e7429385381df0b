use crate::{artists, bookings};
use artistly_core::{
    error::{ArtistlyError, Result},
    storage::DataSource,
    types::{Artist, ArtistId, BookingId, BookingRequest, BookingStatus},
};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Persistent data source using `SQLite`
pub struct SqliteDataSource {
    pool: SqlitePool,
}

impl SqliteDataSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DataSource for SqliteDataSource {
    // Artists
    async fn list_artists(&self) -> Result<Vec<Artist>> {
        Ok(artists::get_all(&self.pool).await?)
    }

    async fn get_artist(&self, id: &ArtistId) -> Result<Option<Artist>> {
        Ok(artists::get_by_id(&self.pool, id).await?)
    }

    async fn insert_artist(&self, artist: Artist) -> Result<Artist> {
        Ok(artists::insert(&self.pool, &artist).await?)
    }

    // Bookings
    async fn list_bookings(&self) -> Result<Vec<BookingRequest>> {
        Ok(bookings::get_all(&self.pool).await?)
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Option<BookingRequest>> {
        Ok(bookings::get_by_id(&self.pool, id).await?)
    }

    async fn insert_booking(&self, booking: BookingRequest) -> Result<BookingRequest> {
        Ok(bookings::insert(&self.pool, &booking).await?)
    }

    async fn update_booking_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<Option<BookingRequest>> {
        if BookingStatus::Pending.can_transition_to(status)
            && bookings::update_pending_status(&self.pool, id, status).await?
        {
            return Ok(bookings::get_by_id(&self.pool, id).await?);
        }

        match bookings::get_by_id(&self.pool, id).await? {
            None => Ok(None),
            Some(current) => Err(ArtistlyError::InvalidTransition {
                from: current.status,
                to: status,
            }),
        }
    }
}

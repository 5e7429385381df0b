use crate::error::{Result, StorageError};
use artistly_core::types::{ArtistId, BookingId, BookingRequest, BookingStatus};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

const SELECT_BOOKING: &str = "SELECT id, artist_id, artist_name, event_date, location, budget,
        status, created_at
 FROM bookings";

#[derive(Debug, FromRow)]
struct BookingRow {
    id: String,
    artist_id: String,
    artist_name: String,
    event_date: Option<NaiveDate>,
    location: String,
    budget: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for BookingRequest {
    type Error = StorageError;

    fn try_from(row: BookingRow) -> Result<Self> {
        let status = BookingStatus::from_str(&row.status).ok_or_else(|| {
            StorageError::CorruptRow(format!("booking {} has status {:?}", row.id, row.status))
        })?;

        Ok(BookingRequest {
            id: BookingId::new(row.id),
            artist_id: ArtistId::new(row.artist_id),
            artist_name: row.artist_name,
            event_date: row.event_date,
            location: row.location,
            budget: row.budget,
            status,
            created_at: row.created_at,
        })
    }
}

/// All booking requests in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<BookingRequest>> {
    let rows: Vec<BookingRow> = sqlx::query_as(&format!("{SELECT_BOOKING} ORDER BY seq"))
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(BookingRequest::try_from).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: &BookingId) -> Result<Option<BookingRequest>> {
    let row: Option<BookingRow> = sqlx::query_as(&format!("{SELECT_BOOKING} WHERE id = ?"))
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.map(BookingRequest::try_from).transpose()
}

pub async fn insert(pool: &SqlitePool, booking: &BookingRequest) -> Result<BookingRequest> {
    sqlx::query(
        "INSERT INTO bookings (id, artist_id, artist_name, event_date, location, budget,
                               status, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(booking.id.as_str())
    .bind(booking.artist_id.as_str())
    .bind(&booking.artist_name)
    .bind(booking.event_date)
    .bind(&booking.location)
    .bind(&booking.budget)
    .bind(booking.status.as_str())
    .bind(booking.created_at)
    .execute(pool)
    .await?;

    get_by_id(pool, &booking.id)
        .await?
        .ok_or_else(|| StorageError::not_found("Booking", booking.id.as_str()))
}

/// Move a pending booking to `status` in a single statement
///
/// Returns `false` when no pending row has that ID, either because the ID
/// is unknown or because the booking was already decided.
pub async fn update_pending_status(
    pool: &SqlitePool,
    id: &BookingId,
    status: BookingStatus,
) -> Result<bool> {
    let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ? AND status = ?")
        .bind(status.as_str())
        .bind(id.as_str())
        .bind(BookingStatus::Pending.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

use crate::error::{Result, StorageError};
use artistly_core::types::{Artist, ArtistId};
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, SqlitePool};

const SELECT_ARTIST: &str = "SELECT id, name, bio, category, languages, fee_range, location,
        profile_image, rating, review_count, is_verified, created_at
 FROM artists";

#[derive(Debug, FromRow)]
struct ArtistRow {
    id: String,
    name: String,
    bio: String,
    category: Json<Vec<String>>,
    languages: Json<Vec<String>>,
    fee_range: String,
    location: String,
    profile_image: Option<String>,
    rating: f64,
    review_count: i64,
    is_verified: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = StorageError;

    fn try_from(row: ArtistRow) -> Result<Self> {
        let review_count = u32::try_from(row.review_count).map_err(|_| {
            StorageError::CorruptRow(format!(
                "artist {} has review_count {}",
                row.id, row.review_count
            ))
        })?;

        Ok(Artist {
            id: ArtistId::new(row.id),
            name: row.name,
            bio: row.bio,
            category: row.category.0,
            languages: row.languages.0,
            fee_range: row.fee_range,
            location: row.location,
            profile_image: row.profile_image,
            rating: row.rating as f32,
            review_count,
            is_verified: row.is_verified,
            created_at: row.created_at,
        })
    }
}

/// All artists in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows: Vec<ArtistRow> = sqlx::query_as(&format!("{SELECT_ARTIST} ORDER BY seq"))
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(Artist::try_from).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: &ArtistId) -> Result<Option<Artist>> {
    let row: Option<ArtistRow> = sqlx::query_as(&format!("{SELECT_ARTIST} WHERE id = ?"))
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.map(Artist::try_from).transpose()
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artists")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn insert(pool: &SqlitePool, artist: &Artist) -> Result<Artist> {
    sqlx::query(
        "INSERT INTO artists (id, name, bio, category, languages, fee_range, location,
                              profile_image, rating, review_count, is_verified, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(artist.id.as_str())
    .bind(&artist.name)
    .bind(&artist.bio)
    .bind(Json(&artist.category))
    .bind(Json(&artist.languages))
    .bind(&artist.fee_range)
    .bind(&artist.location)
    .bind(&artist.profile_image)
    .bind(f64::from(artist.rating))
    .bind(i64::from(artist.review_count))
    .bind(artist.is_verified)
    .bind(artist.created_at)
    .execute(pool)
    .await?;

    get_by_id(pool, &artist.id)
        .await?
        .ok_or_else(|| StorageError::not_found("Artist", artist.id.as_str()))
}

//! Song documents

use sonora_core::{error::Result, types::*, validation::require_fields};
use sqlx::SqlitePool;

/// Maximum number of songs returned by [`get_all`]
///
/// There is no pagination token; songs past the cap are not reachable
/// through the listing.
pub const ALL_SONGS_LIMIT: i64 = 1000;

/// Insert a song document
pub async fn insert(pool: &SqlitePool, song: &Song) -> Result<()> {
    require_fields(&[("song id", song.id.as_str())])?;

    let body = serde_json::to_string(song)?;

    sqlx::query("INSERT INTO songs (id, body) VALUES (?, ?)")
        .bind(&song.id)
        .bind(body)
        .execute(pool)
        .await?;

    Ok(())
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    require_fields(&[("id", id.as_str())])?;

    let body: Option<String> = sqlx::query_scalar("SELECT body FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(body.map(|b| serde_json::from_str(&b)).transpose()?)
}

/// Get up to [`ALL_SONGS_LIMIT`] songs in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let bodies: Vec<String> = sqlx::query_scalar("SELECT body FROM songs ORDER BY rowid LIMIT ?")
        .bind(ALL_SONGS_LIMIT)
        .fetch_all(pool)
        .await?;

    bodies
        .iter()
        .map(|b| serde_json::from_str(b).map_err(Into::into))
        .collect()
}

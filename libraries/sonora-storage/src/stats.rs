//! Collection counts for maintenance commands

use sonora_core::{error::Result, types::CatalogStats};
use sqlx::{Row, SqlitePool};

/// Count the documents in every collection in one round trip
pub async fn collect(pool: &SqlitePool) -> Result<CatalogStats> {
    let row = sqlx::query(
        r#"
        SELECT
            (SELECT COUNT(*) FROM songs) AS songs,
            (SELECT COUNT(*) FROM segments) AS segments,
            (SELECT COUNT(*) FROM users) AS users,
            (SELECT COUNT(*) FROM playlists) AS playlists
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(CatalogStats {
        songs: row.try_get("songs")?,
        segments: row.try_get("segments")?,
        users: row.try_get("users")?,
        playlists: row.try_get("playlists")?,
    })
}

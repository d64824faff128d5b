//! Media segment documents

use sonora_core::{error::Result, types::*, validation::require_fields};
use sqlx::SqlitePool;

/// Insert a single segment
pub async fn insert(pool: &SqlitePool, segment: &Segment) -> Result<()> {
    require_fields(&[("segment id", segment.id.as_str())])?;

    let body = serde_json::to_string(segment)?;

    sqlx::query("INSERT INTO segments (id, song_id, body) VALUES (?, ?, ?)")
        .bind(&segment.id)
        .bind(&segment.song_id)
        .bind(body)
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert segments sequentially
///
/// No transaction wraps the batch: the first failure is returned and every
/// segment inserted before it stays committed.
pub async fn insert_many(pool: &SqlitePool, segments: &[Segment]) -> Result<()> {
    for segment in segments {
        insert(pool, segment).await?;
    }
    Ok(())
}

/// Get segment by ID
pub async fn get_by_id(pool: &SqlitePool, id: &SegmentId) -> Result<Option<Segment>> {
    require_fields(&[("id", id.as_str())])?;

    let body: Option<String> = sqlx::query_scalar("SELECT body FROM segments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(body.map(|b| serde_json::from_str(&b)).transpose()?)
}

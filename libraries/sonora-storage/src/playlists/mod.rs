//! Playlist documents with embedded song snapshots

use rand::{distributions::Alphanumeric, Rng};
use sonora_core::{error::Result, types::*, validation::require_fields, SonoraError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Length of a generated playlist identifier
pub const PLAYLIST_ID_LEN: usize = 24;

/// How many identifiers [`create`] tries before giving up
pub const MAX_PLAYLIST_ID_ATTEMPTS: u32 = 5;

const SELECT_PLAYLIST: &str = r#"
    SELECT id, owner_id, name, description, shared, created_at, songs
    FROM playlists
    WHERE id = ?
"#;

const SELECT_OWNER_PLAYLISTS: &str = r#"
    SELECT id, owner_id, name, description, shared, created_at
    FROM playlists
    WHERE owner_id = ?
    ORDER BY rowid
"#;

const PUSH_SONG: &str = r#"
    UPDATE playlists
    SET songs = json_insert(songs, '$[#]', json(?))
    WHERE id = ?
"#;

const PUSH_SONG_OWNED: &str = r#"
    UPDATE playlists
    SET songs = json_insert(songs, '$[#]', json(?))
    WHERE id = ? AND owner_id = ?
"#;

// The EXISTS guard keeps the update from matching (and from nulling the
// array) when no embedded song carries the id.
const PULL_SONG: &str = r#"
    UPDATE playlists
    SET songs = json_remove(songs, '$[' || (
        SELECT key FROM json_each(playlists.songs)
        WHERE json_extract(value, '$.id') = ?
        ORDER BY key DESC
        LIMIT 1
    ) || ']')
    WHERE id = ?
      AND EXISTS (
        SELECT 1 FROM json_each(playlists.songs)
        WHERE json_extract(value, '$.id') = ?
      )
"#;

const PULL_SONG_OWNED: &str = r#"
    UPDATE playlists
    SET songs = json_remove(songs, '$[' || (
        SELECT key FROM json_each(playlists.songs)
        WHERE json_extract(value, '$.id') = ?
        ORDER BY key DESC
        LIMIT 1
    ) || ']')
    WHERE id = ? AND owner_id = ?
      AND EXISTS (
        SELECT 1 FROM json_each(playlists.songs)
        WHERE json_extract(value, '$.id') = ?
      )
"#;

/// Generate a random 24-character alphanumeric playlist identifier
pub fn random_playlist_id() -> PlaylistId {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PLAYLIST_ID_LEN)
        .map(char::from)
        .collect();
    PlaylistId::new(token)
}

/// Create a playlist under an identifier drawn from `next_id`
///
/// A primary-key collision draws a fresh identifier and retries the insert,
/// at most `max_attempts` times in total.
pub async fn create(
    pool: &SqlitePool,
    playlist: NewPlaylist,
    next_id: &(dyn Fn() -> PlaylistId + Send + Sync),
    max_attempts: u32,
) -> Result<Playlist> {
    require_fields(&[
        ("owner", playlist.owner_id.as_str()),
        ("name", playlist.name.as_str()),
    ])?;

    for attempt in 1..=max_attempts {
        let id = next_id();

        let result = sqlx::query(
            r#"
            INSERT INTO playlists (id, owner_id, name, description, shared, created_at, songs)
            VALUES (?, ?, ?, ?, ?, ?, '[]')
            "#,
        )
        .bind(&id)
        .bind(&playlist.owner_id)
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(playlist.shared)
        .bind(playlist.created_at)
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!(playlist_id = %id, owner_id = %playlist.owner_id, "playlist created");
                return Ok(playlist.into_playlist(id));
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::warn!(playlist_id = %id, attempt, "playlist id collision, regenerating");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(SonoraError::IdSpaceExhausted {
        attempts: max_attempts,
    })
}

/// Delete a playlist by ID, ignoring ownership
pub async fn delete_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<u64> {
    require_fields(&[("id", id.as_str())])?;

    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a playlist only when it belongs to `owner`
pub async fn delete_owned(pool: &SqlitePool, id: &PlaylistId, owner: &UserId) -> Result<u64> {
    require_fields(&[("id", id.as_str()), ("owner", owner.as_str())])?;

    let result = sqlx::query("DELETE FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Get playlist by ID with its songs
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    require_fields(&[("id", id.as_str())])?;

    let row = sqlx::query(SELECT_PLAYLIST)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| playlist_from_row(&row)).transpose()
}

/// Get the short projection of every playlist owned by `owner`, oldest first
pub async fn get_by_owner(pool: &SqlitePool, owner: &UserId) -> Result<Vec<ShortPlaylist>> {
    require_fields(&[("owner", owner.as_str())])?;

    let rows = sqlx::query(SELECT_OWNER_PLAYLISTS)
        .bind(owner)
        .fetch_all(pool)
        .await?;

    rows.iter().map(short_playlist_from_row).collect()
}

/// Append a song snapshot to the playlist's song list
///
/// With `owner` set the update also filters on ownership, so a mismatch
/// affects zero rows instead of failing.
pub async fn push_song(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner: Option<&UserId>,
    song: &Song,
) -> Result<u64> {
    require_fields(&[("id", id.as_str()), ("song id", song.id.as_str())])?;
    if let Some(owner) = owner {
        require_fields(&[("owner", owner.as_str())])?;
    }

    let body = serde_json::to_string(song)?;

    let result = match owner {
        Some(owner) => {
            sqlx::query(PUSH_SONG_OWNED)
                .bind(body)
                .bind(id)
                .bind(owner)
                .execute(pool)
                .await?
        }
        None => {
            sqlx::query(PUSH_SONG)
                .bind(body)
                .bind(id)
                .execute(pool)
                .await?
        }
    };

    Ok(result.rows_affected())
}

/// Remove the last embedded song whose id is `song_id`
///
/// A push followed by a pull of the same id restores the previous list,
/// even when earlier copies exist.
///
/// Zero rows are affected when the playlist is missing, not owned by
/// `owner`, or holds no such song.
pub async fn pull_song(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner: Option<&UserId>,
    song_id: &SongId,
) -> Result<u64> {
    require_fields(&[("id", id.as_str()), ("song id", song_id.as_str())])?;
    if let Some(owner) = owner {
        require_fields(&[("owner", owner.as_str())])?;
    }

    let result = match owner {
        Some(owner) => {
            sqlx::query(PULL_SONG_OWNED)
                .bind(song_id)
                .bind(id)
                .bind(owner)
                .bind(song_id)
                .execute(pool)
                .await?
        }
        None => {
            sqlx::query(PULL_SONG)
                .bind(song_id)
                .bind(id)
                .bind(song_id)
                .execute(pool)
                .await?
        }
    };

    Ok(result.rows_affected())
}

fn short_playlist_from_row(row: &SqliteRow) -> Result<ShortPlaylist> {
    Ok(ShortPlaylist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        owner_id: row.try_get("owner_id")?,
        shared: row.try_get::<i64, _>("shared")? != 0,
        created_at: row.try_get("created_at")?,
    })
}

fn playlist_from_row(row: &SqliteRow) -> Result<Playlist> {
    let short = short_playlist_from_row(row)?;
    let songs: String = row.try_get("songs")?;

    Ok(Playlist {
        id: short.id,
        name: short.name,
        description: short.description,
        owner_id: short.owner_id,
        shared: short.shared,
        created_at: short.created_at,
        songs: serde_json::from_str(&songs)?,
    })
}

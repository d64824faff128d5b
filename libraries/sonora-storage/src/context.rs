use crate::{playlists, segments, songs, stats, users};
use async_trait::async_trait;
use sonora_core::{error::Result, storage::CatalogStore, types::*};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Source of fresh playlist identifiers
pub type IdGenerator = Arc<dyn Fn() -> PlaylistId + Send + Sync>;

/// Catalog store backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
    next_playlist_id: IdGenerator,
    max_id_attempts: u32,
}

impl SqliteCatalog {
    /// Create a catalog with random 24-char playlist ids and the default attempt bound
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            next_playlist_id: Arc::new(playlists::random_playlist_id),
            max_id_attempts: playlists::MAX_PLAYLIST_ID_ATTEMPTS,
        }
    }

    /// Replace the playlist id generator
    #[must_use]
    pub fn with_id_generator(
        mut self,
        generator: impl Fn() -> PlaylistId + Send + Sync + 'static,
    ) -> Self {
        self.next_playlist_id = Arc::new(generator);
        self
    }

    /// Bound the number of inserts tried per playlist creation
    #[must_use]
    pub fn with_max_id_attempts(mut self, attempts: u32) -> Self {
        self.max_id_attempts = attempts.max(1);
        self
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    // Songs
    async fn insert_song(&self, song: &Song) -> Result<()> {
        songs::insert(&self.pool, song).await
    }

    async fn get_song_by_id(&self, id: &SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn get_all_songs(&self) -> Result<Vec<Song>> {
        songs::get_all(&self.pool).await
    }

    // Segments
    async fn insert_segments(&self, segments: &[Segment]) -> Result<()> {
        segments::insert_many(&self.pool, segments).await
    }

    async fn get_segment(&self, id: &SegmentId) -> Result<Option<Segment>> {
        segments::get_by_id(&self.pool, id).await
    }

    // Users
    async fn new_user(&self, user: &User) -> Result<()> {
        users::insert(&self.pool, user).await
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    // Playlists
    async fn new_playlist(&self, playlist: NewPlaylist) -> Result<Playlist> {
        playlists::create(
            &self.pool,
            playlist,
            self.next_playlist_id.as_ref(),
            self.max_id_attempts,
        )
        .await
    }

    async fn delete_playlist_by_id(&self, id: &PlaylistId) -> Result<u64> {
        playlists::delete_by_id(&self.pool, id).await
    }

    async fn delete_user_playlist(&self, id: &PlaylistId, owner: &UserId) -> Result<u64> {
        playlists::delete_owned(&self.pool, id, owner).await
    }

    async fn get_playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn get_all_user_playlists(&self, owner: &UserId) -> Result<Vec<ShortPlaylist>> {
        playlists::get_by_owner(&self.pool, owner).await
    }

    async fn add_song_to_playlist(&self, id: &PlaylistId, song: &Song) -> Result<u64> {
        playlists::push_song(&self.pool, id, None, song).await
    }

    async fn add_song_to_user_playlist(
        &self,
        id: &PlaylistId,
        owner: &UserId,
        song: &Song,
    ) -> Result<u64> {
        playlists::push_song(&self.pool, id, Some(owner), song).await
    }

    async fn remove_song_from_playlist(&self, id: &PlaylistId, song_id: &SongId) -> Result<u64> {
        playlists::pull_song(&self.pool, id, None, song_id).await
    }

    async fn remove_song_from_user_playlist(
        &self,
        id: &PlaylistId,
        owner: &UserId,
        song_id: &SongId,
    ) -> Result<u64> {
        playlists::pull_song(&self.pool, id, Some(owner), song_id).await
    }

    // Maintenance
    async fn stats(&self) -> Result<CatalogStats> {
        stats::collect(&self.pool).await
    }
}

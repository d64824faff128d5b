//! Storage trait for the catalog's four document collections

use crate::error::Result;
use crate::types::{
    CatalogStats, NewPlaylist, Playlist, PlaylistId, Segment, SegmentId, ShortPlaylist, Song,
    SongId, User, UserId,
};
use async_trait::async_trait;

/// Document-store gateway for songs, segments, users and playlists
///
/// Every operation maps to a single atomic statement against one document,
/// except `insert_segments` (sequential, stops at the first failure) and
/// `new_playlist` (regenerates the id on collision, bounded).
///
/// Mutations that match playlists return the number of affected documents
/// (0 or 1) so callers can tell "not found or not owned" from success.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Songs
    // ========================================================================

    /// Insert a song document
    async fn insert_song(&self, song: &Song) -> Result<()>;

    /// Get song by ID
    async fn get_song_by_id(&self, id: &SongId) -> Result<Option<Song>>;

    /// Get songs in insertion order, capped by the store's listing limit
    async fn get_all_songs(&self) -> Result<Vec<Song>>;

    // ========================================================================
    // Segments
    // ========================================================================

    /// Insert segments one at a time; earlier inserts stay committed on failure
    async fn insert_segments(&self, segments: &[Segment]) -> Result<()>;

    /// Get segment by ID
    async fn get_segment(&self, id: &SegmentId) -> Result<Option<Segment>>;

    // ========================================================================
    // Users
    // ========================================================================

    /// Insert a user document
    async fn new_user(&self, user: &User) -> Result<()>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Store a new playlist under a freshly generated identifier
    async fn new_playlist(&self, playlist: NewPlaylist) -> Result<Playlist>;

    /// Delete a playlist regardless of owner
    async fn delete_playlist_by_id(&self, id: &PlaylistId) -> Result<u64>;

    /// Delete a playlist only if `owner` owns it
    async fn delete_user_playlist(&self, id: &PlaylistId, owner: &UserId) -> Result<u64>;

    /// Get playlist by ID, songs included
    async fn get_playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Get the short projection of every playlist owned by `owner`
    async fn get_all_user_playlists(&self, owner: &UserId) -> Result<Vec<ShortPlaylist>>;

    /// Append a song snapshot to a playlist
    async fn add_song_to_playlist(&self, id: &PlaylistId, song: &Song) -> Result<u64>;

    /// Append a song snapshot to a playlist owned by `owner`
    async fn add_song_to_user_playlist(
        &self,
        id: &PlaylistId,
        owner: &UserId,
        song: &Song,
    ) -> Result<u64>;

    /// Remove the last embedded song carrying `song_id`
    async fn remove_song_from_playlist(&self, id: &PlaylistId, song_id: &SongId) -> Result<u64>;

    /// Remove the last embedded song carrying `song_id` from a playlist owned by `owner`
    async fn remove_song_from_user_playlist(
        &self,
        id: &PlaylistId,
        owner: &UserId,
        song_id: &SongId,
    ) -> Result<u64>;

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Count documents per collection
    async fn stats(&self) -> Result<CatalogStats>;
}

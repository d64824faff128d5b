/// Catalog service - validation and orchestration over the catalog store
use crate::{
    error::{Result, ServerError},
    models::*,
};
use sonora_core::{
    storage::CatalogStore,
    types::{CatalogStats, NewPlaylist, PlaylistId, SegmentId, SongId, User, UserId},
    validation::require_fields,
    SonoraError,
};
use std::sync::Arc;

/// Log a failed store call with the operation name before propagating it
fn logged(op: &'static str) -> impl FnOnce(SonoraError) -> SonoraError {
    move |err| {
        tracing::error!(op, error = %err, "catalog store call failed");
        err
    }
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    // ========================================================================
    // Songs & segments
    // ========================================================================

    /// Store a song's manifest, then its chunks, then the song record
    ///
    /// Stops at the first failure. Whatever was inserted before it stays.
    pub async fn new_segments(&self, req: AddSegmentsRequest) -> Result<Ack> {
        require_fields(&[
            ("song_data.id", req.song_data.id.as_str()),
            ("m3h8.id", req.m3h8.id.as_str()),
        ])?;
        if let Some(pos) = req.ts.iter().position(|s| s.id.is_empty()) {
            return Err(ServerError::BadRequest(format!(
                "ts[{pos}].id must not be empty"
            )));
        }

        self.store
            .insert_segments(std::slice::from_ref(&req.m3h8))
            .await
            .map_err(logged("insert manifest"))?;

        self.store
            .insert_segments(&req.ts)
            .await
            .map_err(logged("insert ts chunks"))?;

        self.store
            .insert_song(&req.song_data)
            .await
            .map_err(logged("insert song"))?;

        tracing::info!(
            song_id = %req.song_data.id,
            user_id = %req.user_id,
            chunks = req.ts.len(),
            "song segments stored"
        );
        Ok(Ack {})
    }

    pub async fn get_all_songs(&self) -> Result<SongsPayload> {
        let songs = self
            .store
            .get_all_songs()
            .await
            .map_err(logged("get all songs"))?;
        Ok(SongsPayload { songs })
    }

    pub async fn get_segment(&self, id: &SegmentId) -> Result<SegmentPayload> {
        require_fields(&[("id", id.as_str())])?;

        let segment = self
            .store
            .get_segment(id)
            .await
            .map_err(logged("get segment"))?
            .ok_or_else(|| SonoraError::not_found("Segment", id.as_str()))?;

        Ok(SegmentPayload { segment })
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn new_user(&self, user: User) -> Result<Ack> {
        require_fields(&[("id", user.id.as_str())])?;

        self.store
            .new_user(&user)
            .await
            .map_err(logged("new user"))?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(Ack {})
    }

    pub async fn get_user(&self, id: &UserId) -> Result<UserPayload> {
        require_fields(&[("id", id.as_str())])?;

        let user = self
            .store
            .get_user_by_id(id)
            .await
            .map_err(logged("get user"))?
            .ok_or_else(|| SonoraError::not_found("User", id.as_str()))?;

        Ok(UserPayload { user })
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Create an empty playlist stamped with the server clock
    pub async fn new_playlist(&self, req: NewPlaylistRequest) -> Result<CreatedPlaylist> {
        require_fields(&[
            ("user_id", req.user_id.as_str()),
            ("playlist_name", req.playlist_name.as_str()),
        ])?;

        let draft = NewPlaylist::new(req.user_id, req.playlist_name)
            .with_description(req.description)
            .with_shared(req.shared);

        let playlist = self
            .store
            .new_playlist(draft)
            .await
            .map_err(logged("new playlist"))?;

        tracing::info!(playlist_id = %playlist.id, owner_id = %playlist.owner_id, "playlist created");
        Ok(CreatedPlaylist {
            playlist_id: playlist.id,
        })
    }

    pub async fn delete_user_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
    ) -> Result<Affected> {
        require_fields(&[
            ("user_id", user_id.as_str()),
            ("playlist_id", playlist_id.as_str()),
        ])?;

        let affected = self
            .store
            .delete_user_playlist(playlist_id, user_id)
            .await
            .map_err(logged("delete user playlist"))?;

        Ok(Affected { affected })
    }

    pub async fn get_user_playlists(&self, user_id: &UserId) -> Result<PlaylistsPayload> {
        require_fields(&[("user_id", user_id.as_str())])?;

        let playlists = self
            .store
            .get_all_user_playlists(user_id)
            .await
            .map_err(logged("get user playlists"))?;

        Ok(PlaylistsPayload { playlists })
    }

    /// Fetch a playlist the user owns, or any shared one
    pub async fn get_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
    ) -> Result<PlaylistPayload> {
        require_fields(&[
            ("user_id", user_id.as_str()),
            ("playlist_id", playlist_id.as_str()),
        ])?;

        let playlist = self
            .store
            .get_playlist_by_id(playlist_id)
            .await
            .map_err(logged("get playlist"))?
            .filter(|p| p.is_visible_to(user_id))
            .ok_or_else(|| SonoraError::not_found("Playlist", playlist_id.as_str()))?;

        Ok(PlaylistPayload { playlist })
    }

    /// Append a snapshot of the song, as stored right now, to the user's playlist
    pub async fn add_song_to_user_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<Affected> {
        require_fields(&[
            ("user_id", user_id.as_str()),
            ("playlist_id", playlist_id.as_str()),
            ("song_id", song_id.as_str()),
        ])?;

        let song = self
            .store
            .get_song_by_id(song_id)
            .await
            .map_err(logged("get song"))?
            .ok_or_else(|| SonoraError::not_found("Song", song_id.as_str()))?;

        let affected = self
            .store
            .add_song_to_user_playlist(playlist_id, user_id, &song)
            .await
            .map_err(logged("add song to user playlist"))?;

        Ok(Affected { affected })
    }

    pub async fn remove_song_from_user_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<Affected> {
        require_fields(&[
            ("user_id", user_id.as_str()),
            ("playlist_id", playlist_id.as_str()),
            ("song_id", song_id.as_str()),
        ])?;

        let affected = self
            .store
            .remove_song_from_user_playlist(playlist_id, user_id, song_id)
            .await
            .map_err(logged("remove song from user playlist"))?;

        Ok(Affected { affected })
    }

    // ========================================================================
    // Admin (no ownership check)
    // ========================================================================

    pub async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<Affected> {
        require_fields(&[("playlist_id", playlist_id.as_str())])?;

        let affected = self
            .store
            .delete_playlist_by_id(playlist_id)
            .await
            .map_err(logged("delete playlist"))?;

        tracing::info!(playlist_id = %playlist_id, affected, "playlist deleted by id");
        Ok(Affected { affected })
    }

    pub async fn add_song_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<Affected> {
        require_fields(&[
            ("playlist_id", playlist_id.as_str()),
            ("song_id", song_id.as_str()),
        ])?;

        let song = self
            .store
            .get_song_by_id(song_id)
            .await
            .map_err(logged("get song"))?
            .ok_or_else(|| SonoraError::not_found("Song", song_id.as_str()))?;

        let affected = self
            .store
            .add_song_to_playlist(playlist_id, &song)
            .await
            .map_err(logged("add song to playlist"))?;

        Ok(Affected { affected })
    }

    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<Affected> {
        require_fields(&[
            ("playlist_id", playlist_id.as_str()),
            ("song_id", song_id.as_str()),
        ])?;

        let affected = self
            .store
            .remove_song_from_playlist(playlist_id, song_id)
            .await
            .map_err(logged("remove song from playlist"))?;

        Ok(Affected { affected })
    }

    pub async fn stats(&self) -> Result<CatalogStats> {
        let stats = self.store.stats().await.map_err(logged("stats"))?;
        Ok(stats)
    }
}

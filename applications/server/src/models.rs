//! Request bodies and response payloads for the `/api/v1` surface

use serde::{Deserialize, Serialize};
use sonora_core::types::{
    Playlist, PlaylistId, Segment, SegmentId, ShortPlaylist, Song, SongId, User, UserId,
};

// ============================================================================
// Requests
// ============================================================================

/// POST /api/v1/addSegment
#[derive(Debug, Clone, Deserialize)]
pub struct AddSegmentsRequest {
    /// Uploader, recorded in logs only
    #[serde(default)]
    pub user_id: UserId,
    /// Transport-stream chunks
    #[serde(default)]
    pub ts: Vec<Segment>,
    /// Playlist manifest
    pub m3h8: Segment,
    pub song_data: Song,
}

/// POST /api/v1/getsegment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetSegmentRequest {
    #[serde(default)]
    pub id: SegmentId,
}

/// POST /api/v1/get_user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetUserRequest {
    #[serde(default)]
    pub id: UserId,
}

/// POST /api/v1/new_playlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPlaylistRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub playlist_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub shared: bool,
}

/// POST /api/v1/delete_playlist and /api/v1/get_playlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPlaylistRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub playlist_id: PlaylistId,
}

/// POST /api/v1/user_playlists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPlaylistsRequest {
    #[serde(default)]
    pub user_id: UserId,
}

/// POST /api/v1/add_song_playlist and /api/v1/remove_song_playlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistSongRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub playlist_id: PlaylistId,
    #[serde(default)]
    pub song_id: SongId,
}

/// POST /api/v1/admin/delete_playlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminPlaylistRequest {
    #[serde(default)]
    pub playlist_id: PlaylistId,
}

/// POST /api/v1/admin/add_song_playlist and /api/v1/admin/remove_song_playlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminPlaylistSongRequest {
    #[serde(default)]
    pub playlist_id: PlaylistId,
    #[serde(default)]
    pub song_id: SongId,
}

// ============================================================================
// Responses
// ============================================================================

/// Uniform envelope: `{ "ok": bool, "error": string, ...data }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub error: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            error: String::new(),
            data,
        }
    }
}

impl ApiResponse<Ack> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            data: Ack {},
        }
    }
}

/// Success with no data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ack {}

/// Number of playlist documents a mutation matched (0 or 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Affected {
    pub affected: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SongsPayload {
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentPayload {
    pub segment: Segment,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedPlaylist {
    pub playlist_id: PlaylistId,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistPayload {
    pub playlist: Playlist,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistsPayload {
    pub playlists: Vec<ShortPlaylist>,
}

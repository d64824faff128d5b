/// Playlists API routes
///
/// Every mutation here is scoped to `user_id`: a playlist owned by someone
/// else reports `affected: 0` rather than an error.
use crate::{
    api::extract::ApiJson,
    error::Result,
    models::{
        Affected, ApiResponse, CreatedPlaylist, NewPlaylistRequest, PlaylistPayload,
        PlaylistSongRequest, PlaylistsPayload, UserPlaylistRequest, UserPlaylistsRequest,
    },
    state::AppState,
};
use axum::{extract::State, Json};

/// POST /api/v1/new_playlist
pub async fn new_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<NewPlaylistRequest>,
) -> Result<Json<ApiResponse<CreatedPlaylist>>> {
    let created = app_state.catalog.new_playlist(req).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// POST /api/v1/delete_playlist
pub async fn delete_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UserPlaylistRequest>,
) -> Result<Json<ApiResponse<Affected>>> {
    let affected = app_state
        .catalog
        .delete_user_playlist(&req.user_id, &req.playlist_id)
        .await?;
    Ok(Json(ApiResponse::success(affected)))
}

/// POST /api/v1/user_playlists
/// Short projection (no songs) of every playlist the user owns
pub async fn user_playlists(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UserPlaylistsRequest>,
) -> Result<Json<ApiResponse<PlaylistsPayload>>> {
    let playlists = app_state.catalog.get_user_playlists(&req.user_id).await?;
    Ok(Json(ApiResponse::success(playlists)))
}

/// POST /api/v1/get_playlist
pub async fn get_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UserPlaylistRequest>,
) -> Result<Json<ApiResponse<PlaylistPayload>>> {
    let playlist = app_state
        .catalog
        .get_playlist(&req.user_id, &req.playlist_id)
        .await?;
    Ok(Json(ApiResponse::success(playlist)))
}

/// POST /api/v1/add_song_playlist
pub async fn add_song_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<PlaylistSongRequest>,
) -> Result<Json<ApiResponse<Affected>>> {
    let affected = app_state
        .catalog
        .add_song_to_user_playlist(&req.user_id, &req.playlist_id, &req.song_id)
        .await?;
    Ok(Json(ApiResponse::success(affected)))
}

/// POST /api/v1/remove_song_playlist
pub async fn remove_song_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<PlaylistSongRequest>,
) -> Result<Json<ApiResponse<Affected>>> {
    let affected = app_state
        .catalog
        .remove_song_from_user_playlist(&req.user_id, &req.playlist_id, &req.song_id)
        .await?;
    Ok(Json(ApiResponse::success(affected)))
}

/// Admin API routes (no ownership check)
use crate::{
    api::extract::ApiJson,
    error::Result,
    models::{AdminPlaylistRequest, AdminPlaylistSongRequest, Affected, ApiResponse},
    state::AppState,
};
use axum::{extract::State, Json};

/// POST /api/v1/admin/delete_playlist
pub async fn delete_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AdminPlaylistRequest>,
) -> Result<Json<ApiResponse<Affected>>> {
    let affected = app_state.catalog.delete_playlist(&req.playlist_id).await?;
    Ok(Json(ApiResponse::success(affected)))
}

/// POST /api/v1/admin/add_song_playlist
pub async fn add_song_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AdminPlaylistSongRequest>,
) -> Result<Json<ApiResponse<Affected>>> {
    let affected = app_state
        .catalog
        .add_song_to_playlist(&req.playlist_id, &req.song_id)
        .await?;
    Ok(Json(ApiResponse::success(affected)))
}

/// POST /api/v1/admin/remove_song_playlist
pub async fn remove_song_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AdminPlaylistSongRequest>,
) -> Result<Json<ApiResponse<Affected>>> {
    let affected = app_state
        .catalog
        .remove_song_from_playlist(&req.playlist_id, &req.song_id)
        .await?;
    Ok(Json(ApiResponse::success(affected)))
}

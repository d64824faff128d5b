/// Songs and segments API routes
use crate::{
    api::extract::ApiJson,
    error::Result,
    models::{AddSegmentsRequest, Ack, ApiResponse, GetSegmentRequest, SegmentPayload, SongsPayload},
    state::AppState,
};
use axum::{extract::State, Json};

/// POST /api/v1/addSegment
/// Store a song's manifest, its chunks and the song record
pub async fn add_segment(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AddSegmentsRequest>,
) -> Result<Json<ApiResponse<Ack>>> {
    let ack = app_state.catalog.new_segments(req).await?;
    Ok(Json(ApiResponse::success(ack)))
}

/// GET /api/v1/allsongs
pub async fn all_songs(State(app_state): State<AppState>) -> Result<Json<ApiResponse<SongsPayload>>> {
    let songs = app_state.catalog.get_all_songs().await?;
    Ok(Json(ApiResponse::success(songs)))
}

/// POST /api/v1/getsegment
pub async fn get_segment(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<GetSegmentRequest>,
) -> Result<Json<ApiResponse<SegmentPayload>>> {
    let segment = app_state.catalog.get_segment(&req.id).await?;
    Ok(Json(ApiResponse::success(segment)))
}

/// Users API routes
use crate::{
    api::extract::ApiJson,
    error::Result,
    models::{Ack, ApiResponse, GetUserRequest, UserPayload},
    state::AppState,
};
use axum::{extract::State, Json};
use sonora_core::types::User;

/// POST /api/v1/new_user
/// The body is the user document itself
pub async fn new_user(
    State(app_state): State<AppState>,
    ApiJson(user): ApiJson<User>,
) -> Result<Json<ApiResponse<Ack>>> {
    let ack = app_state.catalog.new_user(user).await?;
    Ok(Json(ApiResponse::success(ack)))
}

/// POST /api/v1/get_user
pub async fn get_user(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<GetUserRequest>,
) -> Result<Json<ApiResponse<UserPayload>>> {
    let user = app_state.catalog.get_user(&req.id).await?;
    Ok(Json(ApiResponse::success(user)))
}

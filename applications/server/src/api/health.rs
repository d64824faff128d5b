/// Health check API routes
use crate::{error::Result, models::ApiResponse, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use sonora_core::types::CatalogStats;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: CatalogStats,
}

/// GET /api/v1/health - Health check endpoint
///
/// Touches the store, so a broken database answers 500.
pub async fn health(State(app_state): State<AppState>) -> Result<Json<ApiResponse<HealthResponse>>> {
    let catalog = app_state.catalog.stats().await?;

    Ok(Json(ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog,
    })))
}

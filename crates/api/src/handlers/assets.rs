//! Handlers for the asset catalogue (charts, insights, audiences).

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favorites_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::AssetListParams;
use crate::state::AppState;

/// Request body for `POST /api/v1/assets`.
#[derive(Debug, Deserialize)]
pub struct CreateAssetRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// POST /api/v1/assets
pub async fn create_asset(
    State(state): State<AppState>,
    body: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let kind = input
        .kind
        .filter(|kind| !kind.is_empty())
        .ok_or_else(|| AppError::BadRequest("type is required".into()))?;
    let payload = input
        .data
        .ok_or_else(|| AppError::BadRequest("data is required".into()))?;

    let asset = state.service.create_asset(&kind, payload).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/v1/assets/{asset_id}
pub async fn get_asset(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(asset_id) = path?;
    let asset = state.service.get_asset(asset_id).await?;
    Ok(Json(asset))
}

/// GET /api/v1/assets?page=&limit=&type=
pub async fn list_assets(
    State(state): State<AppState>,
    query: Result<Query<AssetListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let (page, limit) = params.page_params().resolve(state.service.settings());
    let assets = state
        .service
        .list_assets(page, limit, params.kind.as_deref())
        .await?;
    Ok(Json(assets))
}

/// DELETE /api/v1/assets/{asset_id}
pub async fn delete_asset(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(asset_id) = path?;
    state.service.delete_asset(asset_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

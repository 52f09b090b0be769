//! Handlers for a user's favorites.
//!
//! Favorites are addressed by `(user_id, asset_id)`; at most one active
//! favorite exists per pair. Removing one soft-deletes it, so a later add
//! creates a fresh favorite with a new id.

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

/// Request body for `POST /api/v1/users/{user_id}/favorites`.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub asset_id: Option<DbId>,
    pub description: Option<String>,
}

/// Request body for `PUT /api/v1/users/{user_id}/favorites/{asset_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateFavoriteRequest {
    pub description: Option<String>,
}

/// GET /api/v1/users/{user_id}/favorites?page=&limit=&type=
pub async fn list_favorites(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    query: Result<Query<AssetListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(user_id) = path?;
    let Query(params) = query?;
    let (page, limit) = params.page_params().resolve(state.service.settings());
    let favorites = state
        .service
        .list_favorites(user_id, page, limit, params.kind.as_deref())
        .await?;
    Ok(Json(favorites))
}

/// POST /api/v1/users/{user_id}/favorites
///
/// An empty `description` is stored as no description.
pub async fn add_favorite(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(user_id) = path?;
    let Json(input) = body?;
    let asset_id = input
        .asset_id
        .ok_or_else(|| AppError::BadRequest("asset_id is required".into()))?;
    let description = input.description.as_deref().filter(|text| !text.is_empty());

    let favorite = state
        .service
        .add_favorite(user_id, asset_id, description)
        .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// PUT /api/v1/users/{user_id}/favorites/{asset_id}
pub async fn update_favorite(
    State(state): State<AppState>,
    path: Result<Path<(DbId, DbId)>, PathRejection>,
    body: Result<Json<UpdateFavoriteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path((user_id, asset_id)) = path?;
    let Json(input) = body?;
    let description = input
        .description
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::BadRequest("description is required".into()))?;

    let favorite = state
        .service
        .update_favorite_description(user_id, asset_id, &description)
        .await?;
    Ok(Json(favorite))
}

/// DELETE /api/v1/users/{user_id}/favorites/{asset_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    path: Result<Path<(DbId, DbId)>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path((user_id, asset_id)) = path?;
    state.service.remove_favorite(user_id, asset_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

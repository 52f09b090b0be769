//! Handlers for user accounts.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favorites_core::types::DbId;

use crate::error::AppResult;
use crate::query::PageParams;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create_user(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = state.service.create_user().await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users?page=&limit=
///
/// Users newest first.
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let (page, limit) = params.resolve(state.service.settings());
    let users = state.service.list_users(page, limit).await?;
    Ok(Json(users))
}

/// DELETE /api/v1/users/{user_id}
///
/// Removes the user and, through the cascade, every favorite they own.
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(user_id) = path?;
    state.service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

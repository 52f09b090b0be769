//! Favorites are scoped to a user, so these routes are merged into the
//! `/users` router rather than mounted on their own prefix.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// User-scoped favorite routes, relative to `/users`.
///
/// ```text
/// GET    /{user_id}/favorites               -> list_favorites
/// POST   /{user_id}/favorites               -> add_favorite
/// PUT    /{user_id}/favorites/{asset_id}    -> update_favorite
/// DELETE /{user_id}/favorites/{asset_id}    -> remove_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/{user_id}/favorites/{asset_id}",
            put(favorites::update_favorite).delete(favorites::remove_favorite),
        )
}

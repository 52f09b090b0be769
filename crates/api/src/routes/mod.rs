pub mod assets;
pub mod favorites;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                    list, create
/// /users/{user_id}                          delete (cascades to favorites)
/// /users/{user_id}/favorites                list, add
/// /users/{user_id}/favorites/{asset_id}     update description, remove
///
/// /assets                                   list (?type=), create
/// /assets/{asset_id}                        get, delete (cascades to favorites)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // User accounts and the favorites they own.
        .nest("/users", users::router().merge(favorites::router()))
        // Asset catalogue.
        .nest("/assets", assets::router())
}

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /              -> list_assets
/// POST   /              -> create_asset
/// GET    /{asset_id}    -> get_asset
/// DELETE /{asset_id}    -> delete_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route(
            "/{asset_id}",
            get(assets::get_asset).delete(assets::delete_asset),
        )
}

//! The storage contract consumed by the domain layer.

use async_trait::async_trait;
use favorites_core::asset_kind::AssetKind;
use favorites_core::types::DbId;

use crate::error::StoreResult;
use crate::models::{Asset, Favorite, User};

/// One page of rows plus the total matching the same filter.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Result of attempting to insert a favorite.
#[derive(Debug, Clone)]
pub enum FavoriteInsert {
    Created(Favorite),
    /// An active favorite for the pair already exists; nothing was written.
    AlreadyActive,
}

/// Durable CRUD plus constraint enforcement for users, assets and favorites.
///
/// Every method is a single atomic unit. "Not found" is reported through the
/// return value (`bool`, `Option`, [`FavoriteInsert`]), never as an error.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Insert the user if absent. Returns the stored row either way.
    async fn create_user(&self, id: DbId) -> StoreResult<User>;

    async fn user_exists(&self, id: DbId) -> StoreResult<bool>;

    /// Users newest-first.
    async fn list_users(&self, limit: i64, offset: i64) -> StoreResult<Listing<User>>;

    /// Delete a user and, by cascade, all of the user's favorites.
    async fn delete_user(&self, id: DbId) -> StoreResult<bool>;

    /// Store a new asset under a freshly generated id.
    async fn create_asset(&self, kind: AssetKind, payload: serde_json::Value) -> StoreResult<Asset>;

    async fn get_asset(&self, id: DbId) -> StoreResult<Option<Asset>>;

    async fn asset_exists(&self, id: DbId) -> StoreResult<bool>;

    /// Assets newest-first, optionally restricted to one kind.
    async fn list_assets(
        &self,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Listing<Asset>>;

    /// Delete an asset and, by cascade, every favorite pointing at it.
    async fn delete_asset(&self, id: DbId) -> StoreResult<bool>;

    /// Conditionally insert a new active favorite.
    async fn add_favorite(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: Option<&str>,
    ) -> StoreResult<FavoriteInsert>;

    /// Active favorites of a user joined with their assets, newest first.
    async fn get_favorites(
        &self,
        user_id: DbId,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Listing<Favorite>>;

    /// Update the description of the active favorite for the pair.
    async fn update_favorite_description(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: &str,
    ) -> StoreResult<Option<Favorite>>;

    /// Soft-delete the active favorite for the pair.
    async fn remove_favorite(&self, user_id: DbId, asset_id: DbId) -> StoreResult<bool>;
}

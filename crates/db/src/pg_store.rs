//! PostgreSQL-backed [`FavoritesStore`].

use async_trait::async_trait;
use favorites_core::asset_kind::AssetKind;
use favorites_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::{Asset, Favorite, User};
use crate::repositories::{AssetRepo, FavoriteRepo, UserRepo};
use crate::store::{FavoriteInsert, FavoritesStore, Listing};

/// Production store. Cheap to clone (the pool is reference-counted).
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoritesStore for PgStore {
    async fn create_user(&self, id: DbId) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, id).await?)
    }

    async fn user_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(UserRepo::exists(&self.pool, id).await?)
    }

    async fn list_users(&self, limit: i64, offset: i64) -> StoreResult<Listing<User>> {
        let total = UserRepo::count(&self.pool).await?;
        let items = UserRepo::list(&self.pool, limit, offset).await?;
        Ok(Listing { items, total })
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        Ok(UserRepo::delete(&self.pool, id).await?)
    }

    async fn create_asset(&self, kind: AssetKind, payload: serde_json::Value) -> StoreResult<Asset> {
        AssetRepo::create(&self.pool, new_id(), kind, &payload).await
    }

    async fn get_asset(&self, id: DbId) -> StoreResult<Option<Asset>> {
        AssetRepo::find_by_id(&self.pool, id).await
    }

    async fn asset_exists(&self, id: DbId) -> StoreResult<bool> {
        AssetRepo::exists(&self.pool, id).await
    }

    async fn list_assets(
        &self,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Listing<Asset>> {
        let total = AssetRepo::count(&self.pool, kind).await?;
        let items = AssetRepo::list(&self.pool, limit, offset, kind).await?;
        Ok(Listing { items, total })
    }

    async fn delete_asset(&self, id: DbId) -> StoreResult<bool> {
        AssetRepo::delete(&self.pool, id).await
    }

    async fn add_favorite(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: Option<&str>,
    ) -> StoreResult<FavoriteInsert> {
        let inserted =
            FavoriteRepo::insert(&self.pool, new_id(), user_id, asset_id, description).await?;
        Ok(match inserted {
            Some(favorite) => FavoriteInsert::Created(favorite),
            None => FavoriteInsert::AlreadyActive,
        })
    }

    async fn get_favorites(
        &self,
        user_id: DbId,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Listing<Favorite>> {
        let total = FavoriteRepo::count_active(&self.pool, user_id, kind).await?;
        let items = FavoriteRepo::list_active(&self.pool, user_id, limit, offset, kind).await?;
        Ok(Listing { items, total })
    }

    async fn update_favorite_description(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: &str,
    ) -> StoreResult<Option<Favorite>> {
        FavoriteRepo::update_description(&self.pool, user_id, asset_id, description).await
    }

    async fn remove_favorite(&self, user_id: DbId, asset_id: DbId) -> StoreResult<bool> {
        FavoriteRepo::soft_delete(&self.pool, user_id, asset_id).await
    }
}

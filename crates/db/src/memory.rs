//! In-process [`FavoritesStore`] with the same contract as [`crate::PgStore`].
//!
//! All tables sit behind one async mutex, so every operation is atomic with
//! respect to every other, mirroring the single-statement guarantees of the
//! PostgreSQL implementation: partial uniqueness of active favorites, soft
//! deletes, and hard cascades from users and assets.

use async_trait::async_trait;
use chrono::Utc;
use favorites_core::asset_kind::AssetKind;
use favorites_core::types::{new_id, DbId, Timestamp};
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::{Asset, Favorite, User};
use crate::store::{FavoriteInsert, FavoritesStore, Listing};

/// A stored favorite row (unjoined).
#[derive(Debug, Clone)]
struct FavoriteRecord {
    id: DbId,
    user_id: DbId,
    asset_id: DbId,
    description: Option<String>,
    added_at: Timestamp,
    deleted_at: Option<Timestamp>,
}

impl FavoriteRecord {
    fn is_active_for(&self, user_id: DbId, asset_id: DbId) -> bool {
        self.deleted_at.is_none() && self.user_id == user_id && self.asset_id == asset_id
    }
}

/// Rows are kept in insertion order; iterating in reverse yields newest first.
#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    assets: Vec<Asset>,
    favorites: Vec<FavoriteRecord>,
}

impl Tables {
    fn asset(&self, id: DbId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    fn join(&self, record: &FavoriteRecord) -> StoreResult<Favorite> {
        let asset = self.asset(record.asset_id).ok_or_else(|| {
            StoreError::Decode(format!(
                "favorite {} references missing asset {}",
                record.id, record.asset_id
            ))
        })?;
        Ok(Favorite {
            id: record.id,
            user_id: record.user_id,
            asset: asset.clone(),
            description: record.description.clone(),
            added_at: record.added_at,
            deleted_at: record.deleted_at,
        })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every favorite row ever written for the pair, oldest first, including
    /// soft-deleted ones.
    pub async fn favorite_history(&self, user_id: DbId, asset_id: DbId) -> StoreResult<Vec<Favorite>> {
        let tables = self.tables.lock().await;
        tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id && f.asset_id == asset_id)
            .map(|f| tables.join(f))
            .collect()
    }

    /// Total favorite rows, active or not.
    pub async fn favorite_row_count(&self) -> usize {
        self.tables.lock().await.favorites.len()
    }
}

/// Apply `LIMIT`/`OFFSET` semantics to an iterator.
fn paginate<T>(items: impl Iterator<Item = T>, limit: i64, offset: i64) -> Vec<T> {
    let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
    items.skip(skip).take(take).collect()
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[async_trait]
impl FavoritesStore for InMemoryStore {
    async fn create_user(&self, id: DbId) -> StoreResult<User> {
        let mut tables = self.tables.lock().await;
        if let Some(existing) = tables.users.iter().find(|u| u.id == id) {
            return Ok(existing.clone());
        }
        let user = User {
            id,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn user_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.lock().await.users.iter().any(|u| u.id == id))
    }

    async fn list_users(&self, limit: i64, offset: i64) -> StoreResult<Listing<User>> {
        let tables = self.tables.lock().await;
        let total = count(tables.users.len());
        let items = paginate(tables.users.iter().rev().cloned(), limit, offset);
        Ok(Listing { items, total })
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        if tables.users.len() == before {
            return Ok(false);
        }
        tables.favorites.retain(|f| f.user_id != id);
        Ok(true)
    }

    async fn create_asset(&self, kind: AssetKind, payload: serde_json::Value) -> StoreResult<Asset> {
        let asset = Asset {
            id: new_id(),
            kind,
            payload,
            created_at: Utc::now(),
        };
        self.tables.lock().await.assets.push(asset.clone());
        Ok(asset)
    }

    async fn get_asset(&self, id: DbId) -> StoreResult<Option<Asset>> {
        Ok(self.tables.lock().await.asset(id).cloned())
    }

    async fn asset_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.lock().await.asset(id).is_some())
    }

    async fn list_assets(
        &self,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Listing<Asset>> {
        let tables = self.tables.lock().await;
        let matching: Vec<&Asset> = tables
            .assets
            .iter()
            .rev()
            .filter(|a| kind.map_or(true, |k| a.kind == k))
            .collect();
        let total = count(matching.len());
        let items = paginate(matching.into_iter().cloned(), limit, offset);
        Ok(Listing { items, total })
    }

    async fn delete_asset(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.assets.len();
        tables.assets.retain(|a| a.id != id);
        if tables.assets.len() == before {
            return Ok(false);
        }
        tables.favorites.retain(|f| f.asset_id != id);
        Ok(true)
    }

    async fn add_favorite(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: Option<&str>,
    ) -> StoreResult<FavoriteInsert> {
        let mut tables = self.tables.lock().await;
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(StoreError::MissingUser);
        }
        if tables.asset(asset_id).is_none() {
            return Err(StoreError::MissingAsset);
        }
        if tables
            .favorites
            .iter()
            .any(|f| f.is_active_for(user_id, asset_id))
        {
            return Ok(FavoriteInsert::AlreadyActive);
        }

        let record = FavoriteRecord {
            id: new_id(),
            user_id,
            asset_id,
            description: description.map(str::to_owned),
            added_at: Utc::now(),
            deleted_at: None,
        };
        let favorite = tables.join(&record)?;
        tables.favorites.push(record);
        Ok(FavoriteInsert::Created(favorite))
    }

    async fn get_favorites(
        &self,
        user_id: DbId,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Listing<Favorite>> {
        let tables = self.tables.lock().await;
        let matching: Vec<&FavoriteRecord> = tables
            .favorites
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id && f.deleted_at.is_none())
            .filter(|f| {
                kind.map_or(true, |k| tables.asset(f.asset_id).is_some_and(|a| a.kind == k))
            })
            .collect();
        let total = count(matching.len());
        let items = paginate(matching.into_iter(), limit, offset)
            .into_iter()
            .map(|f| tables.join(f))
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(Listing { items, total })
    }

    async fn update_favorite_description(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: &str,
    ) -> StoreResult<Option<Favorite>> {
        let mut tables = self.tables.lock().await;
        let Some(record) = tables
            .favorites
            .iter_mut()
            .find(|f| f.is_active_for(user_id, asset_id))
        else {
            return Ok(None);
        };
        record.description = Some(description.to_owned());
        let updated = record.clone();
        tables.join(&updated).map(Some)
    }

    async fn remove_favorite(&self, user_id: DbId, asset_id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.lock().await;
        match tables
            .favorites
            .iter_mut()
            .find(|f| f.is_active_for(user_id, asset_id))
        {
            Some(record) => {
                record.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

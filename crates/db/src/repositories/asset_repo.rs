//! Repository for the `assets` table.

use favorites_core::asset_kind::AssetKind;
use favorites_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::asset::{AssetRow, ASSET_COLUMNS};
use crate::models::Asset;

/// Provides data access for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset with a caller-generated id.
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        kind: AssetKind,
        payload: &serde_json::Value,
    ) -> StoreResult<Asset> {
        let query = format!(
            "INSERT INTO assets (id, kind, payload) \
             VALUES ($1, $2, $3) \
             RETURNING {ASSET_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .bind(kind.as_str())
            .bind(payload)
            .fetch_one(pool)
            .await?;
        row.try_into()
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Option<Asset>> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(Asset::try_from).transpose()
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let exists = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM assets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// List assets newest-first, optionally restricted to one kind.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Vec<Asset>> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE ($1::text IS NULL OR kind = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, AssetRow>(&query)
            .bind(kind.map(|k| k.as_str()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        rows.into_iter().map(Asset::try_from).collect()
    }

    /// Count assets under the same filter as [`AssetRepo::list`].
    pub async fn count(pool: &PgPool, kind: Option<AssetKind>) -> StoreResult<i64> {
        let total = sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE ($1::text IS NULL OR kind = $1)")
            .bind(kind.map(|k| k.as_str()))
            .fetch_one(pool)
            .await?;
        Ok(total)
    }

    /// Delete an asset. Cascade deletes every favorite pointing at it.
    ///
    /// Returns `true` if an asset was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

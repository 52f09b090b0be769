//! Repository for the `favorites` table.
//!
//! Favorites are soft-deleted. Every query that targets "the" favorite of a
//! (user, asset) pair filters on `deleted_at IS NULL`, matching the partial
//! unique index `uq_favorites_active_user_asset`.

use favorites_core::asset_kind::AssetKind;
use favorites_core::types::DbId;
use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};
use crate::models::favorite::{FavoriteRow, FAVORITE_JOIN_COLUMNS};
use crate::models::Favorite;

/// Columns returned by `INSERT`/`UPDATE ... RETURNING` on `favorites`.
const RETURNING_COLUMNS: &str = "id, user_id, asset_id, description, added_at, deleted_at";

/// Provides data access for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a new active favorite.
    ///
    /// A single conditional insert: when an active favorite for the pair
    /// already exists the partial unique index makes the insert a no-op and
    /// `None` is returned. Two concurrent calls for the same pair therefore
    /// produce exactly one row.
    pub async fn insert(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        asset_id: DbId,
        description: Option<&str>,
    ) -> StoreResult<Option<Favorite>> {
        let query = format!(
            "WITH f AS ( \
                 INSERT INTO favorites (id, user_id, asset_id, description) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (user_id, asset_id) WHERE deleted_at IS NULL DO NOTHING \
                 RETURNING {RETURNING_COLUMNS} \
             ) \
             SELECT {FAVORITE_JOIN_COLUMNS} \
             FROM f JOIN assets a ON a.id = f.asset_id"
        );
        let row = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(id)
            .bind(user_id)
            .bind(asset_id)
            .bind(description)
            .fetch_optional(pool)
            .await
            .map_err(StoreError::from_favorite_write)?;
        row.map(Favorite::try_from).transpose()
    }

    /// List a user's active favorites, newest first, optionally by asset kind.
    pub async fn list_active(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
        kind: Option<AssetKind>,
    ) -> StoreResult<Vec<Favorite>> {
        let query = format!(
            "SELECT {FAVORITE_JOIN_COLUMNS} \
             FROM favorites f JOIN assets a ON a.id = f.asset_id \
             WHERE f.user_id = $1 AND f.deleted_at IS NULL \
               AND ($2::text IS NULL OR a.kind = $2) \
             ORDER BY f.added_at DESC, f.id DESC \
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(user_id)
            .bind(kind.map(|k| k.as_str()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        rows.into_iter().map(Favorite::try_from).collect()
    }

    /// Count a user's active favorites under the same filter as
    /// [`FavoriteRepo::list_active`].
    pub async fn count_active(
        pool: &PgPool,
        user_id: DbId,
        kind: Option<AssetKind>,
    ) -> StoreResult<i64> {
        let total = sqlx::query_scalar(
            "SELECT COUNT(*) \
             FROM favorites f JOIN assets a ON a.id = f.asset_id \
             WHERE f.user_id = $1 AND f.deleted_at IS NULL \
               AND ($2::text IS NULL OR a.kind = $2)",
        )
        .bind(user_id)
        .bind(kind.map(|k| k.as_str()))
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Replace the description on the active favorite for the pair.
    ///
    /// Returns `None` if no active favorite exists.
    pub async fn update_description(
        pool: &PgPool,
        user_id: DbId,
        asset_id: DbId,
        description: &str,
    ) -> StoreResult<Option<Favorite>> {
        let query = format!(
            "WITH f AS ( \
                 UPDATE favorites SET description = $3 \
                 WHERE user_id = $1 AND asset_id = $2 AND deleted_at IS NULL \
                 RETURNING {RETURNING_COLUMNS} \
             ) \
             SELECT {FAVORITE_JOIN_COLUMNS} \
             FROM f JOIN assets a ON a.id = f.asset_id"
        );
        let row = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(user_id)
            .bind(asset_id)
            .bind(description)
            .fetch_optional(pool)
            .await?;
        row.map(Favorite::try_from).transpose()
    }

    /// Soft-delete the active favorite for the pair.
    ///
    /// Already-deleted rows are never touched, so a second call returns
    /// `false`.
    pub async fn soft_delete(pool: &PgPool, user_id: DbId, asset_id: DbId) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE favorites SET deleted_at = clock_timestamp() \
             WHERE user_id = $1 AND asset_id = $2 AND deleted_at IS NULL",
        )
        .bind(user_id)
        .bind(asset_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

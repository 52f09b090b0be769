//! Repository for the `users` table.

use favorites_core::types::DbId;
use sqlx::PgPool;

use crate::models::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, created_at";

/// Provides data access for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user, or return the existing row if the id is taken.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING`; the `UNION ALL` branch picks
    /// up a pre-existing row in the same statement. If a concurrent
    /// transaction committed the same id after our snapshot was taken, the
    /// statement returns nothing and a fresh `SELECT` is issued.
    pub async fn create(pool: &PgPool, id: DbId) -> Result<User, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                 INSERT INTO users (id) VALUES ($1) \
                 ON CONFLICT (id) DO NOTHING \
                 RETURNING {COLUMNS} \
             ) \
             SELECT {COLUMNS} FROM inserted \
             UNION ALL \
             SELECT {COLUMNS} FROM users WHERE id = $1 \
             LIMIT 1"
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match created {
            Some(user) => Ok(user),
            None => Self::find_by_id(pool, id)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List users newest-first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    /// Delete a user. Cascade deletes all of the user's favorites.
    ///
    /// Returns `true` if a user was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Foreign-key constraint linking `favorites.user_id` to `users`.
pub const FK_FAVORITES_USER: &str = "fk_favorites_user_id";

/// Foreign-key constraint linking `favorites.asset_id` to `assets`.
pub const FK_FAVORITES_ASSET: &str = "fk_favorites_asset_id";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Failures raised by a [`crate::FavoritesStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The favorite's user disappeared between validation and insert.
    #[error("Referenced user does not exist")]
    MissingUser,

    /// The favorite's asset disappeared between validation and insert.
    #[error("Referenced asset does not exist")]
    MissingAsset,

    /// A stored row could not be mapped back to a domain value.
    #[error("Stored row could not be decoded: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Classify a sqlx error raised while writing a favorite.
    ///
    /// Foreign-key violations on the favorites table become
    /// [`StoreError::MissingUser`] / [`StoreError::MissingAsset`]; everything
    /// else is passed through as [`StoreError::Database`].
    pub fn from_favorite_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_FOREIGN_KEY_VIOLATION) {
                match db_err.constraint() {
                    Some(FK_FAVORITES_USER) => return Self::MissingUser,
                    Some(FK_FAVORITES_ASSET) => return Self::MissingAsset,
                    _ => {}
                }
            }
        }
        Self::Database(err)
    }
}

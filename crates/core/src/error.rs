use crate::types::DbId;

/// Domain-level failure outcomes.
///
/// Callers branch on the variant (or on [`CoreError::kind`]), never on the
/// rendered message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("User not found: {0}")]
    UserNotFound(DbId),

    #[error("Asset not found: {0}")]
    AssetNotFound(DbId),

    #[error("Asset {asset_id} is not in the favorites of user {user_id}")]
    NotInFavorites { user_id: DbId, asset_id: DbId },

    #[error("Asset {asset_id} is already in the favorites of user {user_id}")]
    AlreadyFavorited { user_id: DbId, asset_id: DbId },

    #[error("Invalid asset kind '{0}'. Must be one of: chart, insight, audience")]
    InvalidKind(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    Internal,
}

impl CoreError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) | Self::AssetNotFound(_) | Self::NotInFavorites { .. } => {
                ErrorKind::NotFound
            }
            Self::AlreadyFavorited { .. } => ErrorKind::Conflict,
            Self::InvalidKind(_) | Self::Validation(_) => ErrorKind::InvalidInput,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_every_variant() {
        let id = uuid::Uuid::nil();
        assert_eq!(CoreError::UserNotFound(id).kind(), ErrorKind::NotFound);
        assert_eq!(CoreError::AssetNotFound(id).kind(), ErrorKind::NotFound);
        assert_eq!(
            CoreError::NotInFavorites { user_id: id, asset_id: id }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CoreError::AlreadyFavorited { user_id: id, asset_id: id }.kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            CoreError::InvalidKind("video".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            CoreError::Validation("x".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(CoreError::Internal("x".into()).kind(), ErrorKind::Internal);
    }
}

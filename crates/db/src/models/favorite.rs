//! Favorite model: a (possibly soft-deleted) link from a user to an asset.

use favorites_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::error::StoreError;
use crate::models::asset::{parse_kind, Asset};

/// A favorite link joined with the asset it points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub asset: Asset,
    /// User-supplied text shown instead of the asset's own description.
    pub description: Option<String>,
    pub added_at: Timestamp,
    /// `None` while the link is active.
    pub deleted_at: Option<Timestamp>,
}

impl Favorite {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Select list for a `favorites f JOIN assets a` query, aliased to match
/// [`FavoriteRow`].
pub(crate) const FAVORITE_JOIN_COLUMNS: &str = "\
    f.id, f.user_id, f.description, f.added_at, f.deleted_at, \
    a.id AS asset_id, a.kind AS asset_kind, a.payload AS asset_payload, \
    a.created_at AS asset_created_at";

/// A favorites row flattened together with its asset columns.
#[derive(Debug, FromRow)]
pub(crate) struct FavoriteRow {
    pub id: DbId,
    pub user_id: DbId,
    pub description: Option<String>,
    pub added_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub asset_id: DbId,
    pub asset_kind: String,
    pub asset_payload: serde_json::Value,
    pub asset_created_at: Timestamp,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = StoreError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            asset: Asset {
                id: row.asset_id,
                kind: parse_kind(&row.asset_kind)?,
                payload: row.asset_payload,
                created_at: row.asset_created_at,
            },
            description: row.description,
            added_at: row.added_at,
            deleted_at: row.deleted_at,
        })
    }
}

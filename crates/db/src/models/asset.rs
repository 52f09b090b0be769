//! Asset model: a kind tag plus an opaque JSON payload.

use favorites_core::asset_kind::AssetKind;
use favorites_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::error::StoreError;

/// A chart, insight, or audience record.
///
/// Serialized as `{ "id", "type", "data", "created_at" }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(rename = "data")]
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

/// Column list for `assets` queries.
pub(crate) const ASSET_COLUMNS: &str = "id, kind, payload, created_at";

/// A raw row from the `assets` table; `kind` is stored as text.
#[derive(Debug, FromRow)]
pub(crate) struct AssetRow {
    pub id: DbId,
    pub kind: String,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

impl TryFrom<AssetRow> for Asset {
    type Error = StoreError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            kind: parse_kind(&row.kind)?,
            payload: row.payload,
            created_at: row.created_at,
        })
    }
}

pub(crate) fn parse_kind(raw: &str) -> Result<AssetKind, StoreError> {
    raw.parse()
        .map_err(|_| StoreError::Decode(format!("unknown asset kind '{raw}'")))
}

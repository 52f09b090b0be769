//! The closed set of asset kinds a user can favorite.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind tag carried by every asset. The payload shape is opaque to the
/// service; only this tag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Chart,
    Insight,
    Audience,
}

/// All valid kind strings, in declaration order.
pub const VALID_ASSET_KINDS: &[&str] = &["chart", "insight", "audience"];

impl AssetKind {
    /// Return the kind as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Insight => "insight",
            Self::Audience => "audience",
        }
    }

    /// Parse an optional kind filter from a query string.
    ///
    /// `None` and the empty string both mean "no filter".
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

impl FromStr for AssetKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chart" => Ok(Self::Chart),
            "insight" => Ok(Self::Insight),
            "audience" => Ok(Self::Audience),
            _ => Err(CoreError::InvalidKind(s.to_string())),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Shared query parameter types for API handlers.

use favorites_core::pagination::DEFAULT_PAGE;
use favorites_service::PageSettings;
use serde::Deserialize;

/// Page-number pagination parameters (`?page=&limit=`).
///
/// Out-of-range values are clamped by the service; only the defaults are
/// filled in here.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Resolve to `(page, limit)`. A missing or zero `limit` falls back to the
    /// configured default page size.
    pub fn resolve(&self, settings: PageSettings) -> (i64, i64) {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = match self.limit {
            None | Some(0) => settings.default_page_size,
            Some(limit) => limit,
        };
        (page, limit)
    }
}

/// Pagination plus an optional asset type filter (`?page=&limit=&type=`).
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl AssetListParams {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

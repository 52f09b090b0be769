//! Offset pagination: request clamping and response metadata.
//!
//! Out-of-range requests are clamped rather than rejected, so every listing
//! endpoint degrades to the nearest valid page instead of erroring.

use serde::Serialize;

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on the page size unless configured otherwise.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A clamped `(page, limit)` pair. Construct through [`PageRequest::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Clamp `page` to `>= 1` and `limit` to `1..=max_limit`.
    ///
    /// A `max_limit` below 1 is treated as 1.
    pub fn clamped(page: i64, limit: i64, max_limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Build response metadata for this request given the filtered total.
    pub fn meta(&self, total: i64) -> Pagination {
        Pagination::new(*self, total)
    }
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// `total_pages` is `ceil(total / limit)` but never less than 1, so an
    /// empty listing still reports a single (empty) page.
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total = total.max(0);
        let total_pages = total_pages(total, request.limit);
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }
}

fn total_pages(total: i64, limit: i64) -> i64 {
    let limit = limit.max(1);
    let pages = total / limit + i64::from(total % limit != 0);
    pages.max(1)
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            data,
            pagination: request.meta(total),
        }
    }
}

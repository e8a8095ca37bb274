//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaginationParams {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,

    /// Number of items per page
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Number of items to skip for this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Wrap a page of data fetched with these parameters
    pub fn paginate<T>(&self, count: u64, data: T) -> PaginationResult<T> {
        paginate(count, self.page, self.limit, data)
    }
}

/// Page-count and next/previous-page metadata around one page of data.
///
/// `next_page` and `prev_page` are `0` when there is no such page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult<T> {
    pub total_page: u64,
    pub total_data: u64,
    pub next_page: u64,
    pub prev_page: u64,
    pub page: u64,
    pub limit: u64,
    pub data: T,
}

/// Derive pagination metadata for `data`, which the caller already fetched
/// for `page`.
///
/// `page` is not checked against the page count: a page past the end simply
/// has no next page.
///
/// # Panics
///
/// `limit` must be greater than zero.
pub fn paginate<T>(count: u64, page: u64, limit: u64, data: T) -> PaginationResult<T> {
    let total_page = count.div_ceil(limit);
    let next_page = if page < total_page { page + 1 } else { 0 };
    let prev_page = if page > 1 { page - 1 } else { 0 };

    PaginationResult {
        total_page,
        total_data: count,
        next_page,
        prev_page,
        page,
        limit,
        data,
    }
}

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

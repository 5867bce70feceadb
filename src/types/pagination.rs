//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters.
///
/// Values arrive as raw strings so that absent, non-numeric and
/// non-positive values all fall back to the defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, 1-indexed (default 1)
    pub page: Option<String>,
    /// Items per page (default 10, max 100)
    pub items: Option<String>,
}

impl PaginationParams {
    /// Build params from already-known numbers
    pub fn new(page: u64, items: u64) -> Self {
        Self {
            page: Some(page.to_string()),
            items: Some(items.to_string()),
        }
    }

    /// Effective page number
    pub fn page(&self) -> u64 {
        positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        positive(self.items.as_deref())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE)
    }

    /// Calculate offset for database query, bounded by what a signed
    /// 64-bit SQL offset can hold
    pub fn offset(&self) -> u64 {
        (self.page() - 1)
            .checked_mul(self.limit())
            .map_or(MAX_OFFSET, |offset| offset.min(MAX_OFFSET))
    }
}

const MAX_OFFSET: u64 = i64::MAX as u64;

fn positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
}

/// Paginated result: one page of records plus metadata
#[derive(Debug)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page
    pub page: u64,
    /// Total number of pages
    pub pages: u64,
    /// Total number of records
    pub count: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated result
    pub fn new(data: Vec<T>, page: u64, per_page: u64, count: u64) -> Self {
        let pages = if per_page > 0 {
            count.div_ceil(per_page)
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta { page, pages, count },
        }
    }
}

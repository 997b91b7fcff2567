//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for pagination.
///
/// Out-of-range values are not rejected; `normalize` clamps them to the
/// documented bounds instead.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page (max 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100, example = 20)]
    pub page_size: u32,
}

impl PaginationParams {
    /// Normalizes pagination parameters to safe defaults.
    pub fn normalize(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page_size == 0 || self.page_size > 100 {
            self.page_size = default_page_size();
        }
        self
    }

    /// Calculates the offset for database queries.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Returns the limit for database queries.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagedResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number (1-based)
    #[schema(example = 1)]
    pub page: u32,

    /// Number of items per page
    #[schema(example = 20)]
    pub page_size: u32,

    /// Total number of items across all pages
    #[schema(example = 100)]
    pub total_items: u64,

    /// Total number of pages
    #[schema(example = 5)]
    pub total_pages: u32,

    /// Whether there is a next page
    #[schema(example = true)]
    pub has_next: bool,

    /// Whether there is a previous page
    #[schema(example = false)]
    pub has_prev: bool,
}

impl<T> PagedResponse<T> {
    /// Creates a new paged response.
    pub fn new(data: Vec<T>, params: &PaginationParams, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(params.page_size)) as u32;
        let has_next = params.page < total_pages;
        let has_prev = params.page > 1;

        Self {
            data,
            pagination: PaginationMeta {
                page: params.page,
                page_size: params.page_size,
                total_items,
                total_pages,
                has_next,
                has_prev,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_normalize_clamps_zero_and_oversized() {
        let params = PaginationParams {
            page: 0,
            page_size: 500,
        }
        .normalize();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
    }

    #[test]
    fn test_paged_response_metadata() {
        let params = PaginationParams {
            page: 2,
            page_size: 10,
        };
        let response = PagedResponse::new(vec![1, 2, 3], &params, 23);
        assert_eq!(response.pagination.total_pages, 3);
        assert!(response.pagination.has_next);
        assert!(response.pagination.has_prev);
    }

    #[test]
    fn test_paged_response_empty() {
        let params = PaginationParams::default();
        let response = PagedResponse::new(Vec::<i32>::new(), &params, 0);
        assert_eq!(response.pagination.total_pages, 0);
        assert!(!response.pagination.has_next);
        assert!(!response.pagination.has_prev);
    }

    proptest! {
        #[test]
        fn test_offset_never_overlaps_previous_page(
            page in 1u32..10_000,
            page_size in 1u32..=100,
        ) {
            let params = PaginationParams { page, page_size }.normalize();
            prop_assert_eq!(
                params.offset(),
                i64::from(params.page - 1) * params.limit()
            );
            prop_assert!(params.limit() >= 1 && params.limit() <= 100);
        }

        #[test]
        fn test_total_pages_covers_all_items(
            total in 0u64..1_000_000,
            page_size in 1u32..=100,
        ) {
            let params = PaginationParams { page: 1, page_size };
            let response = PagedResponse::new(Vec::<i32>::new(), &params, total);
            let pages = u64::from(response.pagination.total_pages);
            prop_assert!(pages * u64::from(page_size) >= total);
            if total > 0 {
                prop_assert!((pages - 1) * u64::from(page_size) < total);
            }
        }
    }
}

//! Search responses, result pages and pagination.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::product::Product;

/// Items per page. Fixed by the search API.
pub const PAGE_SIZE: u32 = 12;

/// Number of pages needed for `count` items.
///
/// Zero items means zero pages.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Body of a search API response (both `POST /search/` and the paged `GET`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResponse {
    /// Total matches across all pages.
    pub count: u64,
    /// Link to the next page.
    pub next: Option<String>,
    /// Link to the previous page.
    pub previous: Option<String>,
    /// Items on this page, in server order.
    pub results: Vec<Product>,
}

impl SearchResponse {
    /// Decode a response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Convert into a result page for `page_index`.
    pub fn into_page(self, page_index: u32) -> SearchResultPage {
        SearchResultPage {
            items: self.results,
            total_count: self.count,
            page_index,
            page_size: PAGE_SIZE,
        }
    }
}

/// One page of results, derived entirely from one successful response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultPage {
    /// The result items, in server order.
    pub items: Vec<Product>,
    /// Total matches across all pages.
    pub total_count: u64,
    /// Page index (1-indexed).
    pub page_index: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for SearchResultPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_index: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl SearchResultPage {
    /// Total number of pages for this result set.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Pagination info for rendering page controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

impl Pagination {
    /// Create pagination info. `page` is clamped into `1..=total_pages`.
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: page.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check page index bounds.
    pub fn check(&self, page: u32) -> Result<u32, CoreError> {
        if page == 0 || page > self.total_pages {
            return Err(CoreError::PageOutOfRange {
                page,
                total_pages: self.total_pages,
            });
        }
        Ok(page)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: u32) -> Vec<u32> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 0);
    }

    #[test]
    fn test_decode_response() {
        let body = br#"{
            "count": 25,
            "next": "http://localhost:8000/api/search/?page=2",
            "previous": null,
            "results": [
                {"id": 1, "title": "Mouse", "price": "9.99", "rating": "4.0", "is_prime": false,
                 "product_url": "https://example.com/1", "image_url": "https://example.com/1.jpg"}
            ]
        }"#;

        let response = SearchResponse::from_slice(body).unwrap();
        assert_eq!(response.count, 25);
        assert!(response.previous.is_none());

        let page = response.into_page(1);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page.page_size, PAGE_SIZE);
    }

    #[test]
    fn test_decode_garbage() {
        let err = SearchResponse::from_slice(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }

    #[test]
    fn test_pagination_edges() {
        let p = Pagination::new(1, 3);
        assert!(!p.has_prev());
        assert!(p.has_next());

        let p = Pagination::new(3, 3);
        assert!(p.has_prev());
        assert!(!p.has_next());

        let p = Pagination::new(9, 3);
        assert_eq!(p.page, 3);
    }

    #[test]
    fn test_pagination_check() {
        let p = Pagination::new(1, 3);
        assert_eq!(p.check(2).unwrap(), 2);
        assert!(p.check(0).is_err());
        assert!(p.check(4).is_err());
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, 10);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3, 4, 5]);

        let p = Pagination::new(10, 10);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);

        let p = Pagination::new(2, 3);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }
}

//! Product search domain types for Finder.
//!
//! This crate holds everything about a search that does not touch the network:
//!
//! - **Filters**: keyword + price range, minimum rating and Prime constraints
//! - **Form**: client-side validation producing a [`SearchRequest`]
//! - **Pages**: wire response shape, result pages and pagination math
//! - **Catalog**: the in-memory mock catalog used by the offline backend
//! - **State**: the observable search state and its transitions
//!
//! # Example
//!
//! ```rust
//! use finder_core::prelude::*;
//!
//! let filters = SearchFilters {
//!     min_price: 0.0,
//!     max_price: 100.0,
//!     min_rating: 4.0,
//!     is_prime: true,
//! };
//! let request = SearchRequest::new("  mouse ", filters).unwrap();
//! assert_eq!(request.keyword(), "mouse");
//!
//! let hits = MockCatalog::default().filter(&request);
//! assert_eq!(hits.len(), 2);
//! ```

pub mod catalog;
pub mod error;
pub mod filters;
pub mod form;
pub mod page;
pub mod product;
pub mod recent;
pub mod state;

pub use catalog::MockCatalog;
pub use error::{CoreError, FormError, ValidationError};
pub use filters::{SearchFilters, SearchRequest};
pub use form::FilterForm;
pub use page::{total_pages, Pagination, SearchResponse, SearchResultPage, PAGE_SIZE};
pub use product::Product;
pub use recent::RecentSearchList;
pub use state::{Phase, SearchState, Ticket};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::MockCatalog;
    pub use crate::error::{CoreError, FormError, ValidationError};
    pub use crate::filters::{SearchFilters, SearchRequest};
    pub use crate::form::FilterForm;
    pub use crate::page::{total_pages, Pagination, SearchResponse, SearchResultPage, PAGE_SIZE};
    pub use crate::product::Product;
    pub use crate::recent::RecentSearchList;
    pub use crate::state::{Phase, SearchState, Ticket};
}

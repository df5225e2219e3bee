//! In-memory mock catalog.
//!
//! Backs the offline search backend: the same filtering the search API
//! performs, applied to a fixed list of products.

use crate::error::CoreError;
use crate::filters::SearchRequest;
use crate::page::{total_pages, Pagination, SearchResponse, PAGE_SIZE};
use crate::product::Product;

/// A fixed product list searched entirely in memory.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
}

impl MockCatalog {
    /// Catalog over the given products, kept in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All products matching the request, in catalog order.
    pub fn filter(&self, request: &SearchRequest) -> Vec<Product> {
        let filters = request.filters();
        self.products
            .iter()
            .filter(|p| request.matches_title(&p.title))
            .filter(|p| filters.admits(p.price, p.rating, p.is_prime))
            .cloned()
            .collect()
    }

    /// One page of matches, shaped like a search API response.
    ///
    /// `link_base` is the URL the `next`/`previous` links point at, e.g.
    /// `"/api/search/"`. Page 1 of an empty result set is valid; any other
    /// page outside the result set is an error.
    pub fn page(
        &self,
        request: &SearchRequest,
        page: u32,
        link_base: &str,
    ) -> Result<SearchResponse, CoreError> {
        let matches = self.filter(request);
        let count = matches.len() as u64;
        let pages = total_pages(count, PAGE_SIZE);

        if !(page == 1 && pages == 0) {
            Pagination::new(1, pages).check(page)?;
        }

        let start = (page as usize - 1) * PAGE_SIZE as usize;
        let results: Vec<Product> = matches
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE as usize)
            .collect();

        let link = |n: u32| format!("{}?page={}", link_base, n);
        Ok(SearchResponse {
            count,
            next: (page < pages).then(|| link(page + 1)),
            previous: (page > 1).then(|| link(page - 1)),
            results,
        })
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(mock_products())
    }
}

fn mock_product(id: &str, title: &str, price: f64, rating: f64, is_prime: bool, image: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price,
        rating,
        is_prime,
        image_url: format!("https://images.unsplash.com/{}?w=300", image),
        product_url: "#".to_string(),
        created_at: None,
    }
}

/// The demo catalog.
pub fn mock_products() -> Vec<Product> {
    vec![
        mock_product(
            "1",
            "Premium Wireless Mouse",
            29.99,
            4.5,
            true,
            "photo-1527864550417-7fd91fc51a46",
        ),
        mock_product(
            "2",
            "Ergonomic Gaming Mouse",
            59.99,
            4.8,
            true,
            "photo-1615663245857-ac93bb7c39e7",
        ),
        mock_product(
            "3",
            "Basic Wireless Mouse",
            15.99,
            3.9,
            false,
            "photo-1618499890638-3a0dd4b86c96",
        ),
    ]
}

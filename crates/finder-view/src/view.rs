//! View model derived from the search state.

use finder_core::{Pagination, Product, SearchState};
use serde::Serialize;

/// Shown when a search matched nothing.
pub const EMPTY_MESSAGE: &str = "No products found. Try adjusting your search criteria.";

/// Most page links shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 7;

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    /// No search has been performed yet.
    Hidden,
    /// A request is in flight.
    Loading,
    /// The last search matched nothing.
    Empty { message: &'static str },
    /// Result cards in server order.
    Grid {
        cards: Vec<ProductCard>,
        pagination: Option<PageControls>,
    },
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub rating: String,
    pub is_prime: bool,
    pub image_url: String,
    pub product_url: String,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            price: p.price_display(),
            rating: p.rating_display(),
            is_prime: p.is_prime,
            image_url: p.image_url.clone(),
            product_url: p.product_url.clone(),
        }
    }
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: u32,
    pub total: u32,
    /// Visible page numbers, ascending.
    pub pages: Vec<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

impl PageControls {
    /// Controls for `current` of `total`, or `None` for a single page.
    pub fn new(current: u32, total: u32) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let p = Pagination::new(current, total);
        Some(Self {
            current: p.page,
            total,
            pages: p.page_numbers(MAX_VISIBLE_PAGES),
            prev: p.has_prev().then(|| p.page - 1),
            next: p.has_next().then(|| p.page + 1),
        })
    }

    pub fn is_active(&self, page: u32) -> bool {
        page == self.current
    }
}

/// Map the state to what the results area shows.
pub fn present(state: &SearchState) -> ResultsView {
    if !state.has_searched() {
        return ResultsView::Hidden;
    }
    if state.is_loading() {
        return ResultsView::Loading;
    }
    if state.results().is_empty() {
        return ResultsView::Empty {
            message: EMPTY_MESSAGE,
        };
    }

    ResultsView::Grid {
        cards: state.results().iter().map(ProductCard::from).collect(),
        pagination: PageControls::new(state.current_page(), state.total_pages()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use finder_core::SearchResponse;

    pub(crate) fn product(id: &str, price: f64, is_prime: bool) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Mouse <{}>", id),
            price,
            rating: 4.5,
            is_prime,
            image_url: format!("https://img.example.com/{}.jpg", id),
            product_url: format!("https://shop.example.com/p/{}", id),
            created_at: None,
        }
    }

    pub(crate) fn searched(count: u64, products: Vec<Product>) -> SearchState {
        let mut state = SearchState::new();
        state.begin_search("mouse");
        state.complete_search(SearchResponse {
            count,
            next: None,
            previous: None,
            results: products,
        });
        state
    }

    #[test]
    fn test_nothing_before_first_search() {
        assert_eq!(present(&SearchState::new()), ResultsView::Hidden);
    }

    #[test]
    fn test_loading() {
        let mut state = searched(1, vec![product("1", 10.0, true)]);
        state.begin_search("keyboard");
        assert_eq!(present(&state), ResultsView::Loading);
    }

    #[test]
    fn test_empty_results() {
        let state = searched(0, Vec::new());
        assert_eq!(
            present(&state),
            ResultsView::Empty {
                message: EMPTY_MESSAGE
            }
        );
    }

    #[test]
    fn test_cards_in_server_order() {
        let state = searched(
            2,
            vec![product("b", 59.99, true), product("a", 5.0, false)],
        );

        let ResultsView::Grid { cards, pagination } = present(&state) else {
            panic!("expected grid");
        };
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(cards[0].price, "$59.99");
        assert_eq!(cards[1].price, "$5.00");
        assert_eq!(cards[0].rating, "4.5");
        assert!(pagination.is_none());
    }

    #[test]
    fn test_pagination_when_many_pages() {
        let state = searched(25, vec![product("1", 1.0, false)]);
        let ResultsView::Grid { pagination, .. } = present(&state) else {
            panic!("expected grid");
        };
        let controls = pagination.unwrap();
        assert_eq!(controls.pages, vec![1, 2, 3]);
        assert!(controls.is_active(1));
        assert_eq!(controls.prev, None);
        assert_eq!(controls.next, Some(2));
    }

    #[test]
    fn test_failure_shows_stale_results() {
        let mut state = searched(1, vec![product("1", 1.0, false)]);
        state.begin_search("keyboard");
        state.fail("Search failed: request timed out");
        assert!(matches!(present(&state), ResultsView::Grid { .. }));
    }

    #[test]
    fn test_page_controls_window() {
        let controls = PageControls::new(10, 20).unwrap();
        assert_eq!(controls.pages, vec![7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(controls.prev, Some(9));
        assert_eq!(controls.next, Some(11));
        assert!(PageControls::new(1, 1).is_none());
        assert!(PageControls::new(1, 0).is_none());
    }
}

//! Search filters and the validated search request.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Structured constraints narrowing a keyword search.
///
/// Serialized in camelCase, the shape the search API expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Lowest acceptable price, inclusive.
    pub min_price: f64,
    /// Highest acceptable price, inclusive.
    pub max_price: f64,
    /// Lowest acceptable rating, `0..=5`.
    pub min_rating: f64,
    /// Only return Prime-eligible products.
    pub is_prime: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 1000.0,
            min_rating: 0.0,
            is_prime: false,
        }
    }
}

impl SearchFilters {
    /// Check the filter invariants.
    ///
    /// NaN fails both checks since every comparison against it is false.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.min_price <= self.max_price) {
            return Err(ValidationError::InvertedPriceRange {
                min: self.min_price,
                max: self.max_price,
            });
        }
        if !(0.0..=MAX_RATING).contains(&self.min_rating) {
            return Err(ValidationError::RatingOutOfRange(self.min_rating));
        }
        Ok(())
    }

    /// Whether a product with these attributes passes every filter.
    pub fn admits(&self, price: f64, rating: f64, is_prime: bool) -> bool {
        price >= self.min_price
            && price <= self.max_price
            && rating >= self.min_rating
            && (!self.is_prime || is_prime)
    }
}

/// A keyword and filters that passed validation.
///
/// Can only be built through [`SearchRequest::new`], so holding one proves
/// the keyword is non-empty and the filters are consistent. Serializes to the
/// flat JSON body of `POST /search/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    keyword: String,
    #[serde(flatten)]
    filters: SearchFilters,
}

impl SearchRequest {
    /// Validate and build a request. The keyword is trimmed.
    pub fn new(keyword: &str, filters: SearchFilters) -> Result<Self, ValidationError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::EmptyKeyword);
        }
        filters.validate()?;

        Ok(Self {
            keyword: keyword.to_string(),
            filters,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Case-insensitive substring match against a product title.
    pub fn matches_title(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.keyword.to_lowercase())
    }
}

//! Search error types.

use thiserror::Error;

/// Local validation failures. Never reach the network.
///
/// The `Display` text is what the form's error banner shows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Keyword is empty after trimming.
    #[error("Please enter a search keyword")]
    EmptyKeyword,

    /// Price range is inverted (or not a number).
    #[error("Minimum price ({min}) cannot exceed maximum price ({max})")]
    InvertedPriceRange { min: f64, max: f64 },

    /// Minimum rating outside `0..=5`.
    #[error("Minimum rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(f64),
}

/// Errors produced when the form refuses a submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A search is already in flight.
    #[error("A search is already in progress")]
    Busy,
}

/// Errors that can occur handling search data.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A page index the result set does not have.
    #[error("Page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::SerializationError(e.to_string())
    }
}

//! Filter form state.

use crate::error::{FormError, ValidationError};
use crate::filters::{SearchFilters, SearchRequest};

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Search Products";
/// Label of the submit control while a search is in flight.
pub const SUBMIT_LABEL_BUSY: &str = "Searching...";

/// The search form: raw keyword and filter inputs plus the last local error.
///
/// The form never performs I/O. [`FilterForm::submit`] turns its inputs into a
/// [`SearchRequest`] for the orchestrator, or records why it could not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub keyword: String,
    pub filters: SearchFilters,
    disabled: bool,
    error: Option<ValidationError>,
}

impl FilterForm {
    /// Fresh form with default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with the given values.
    pub fn with_values(keyword: impl Into<String>, filters: SearchFilters) -> Self {
        Self {
            keyword: keyword.into(),
            filters,
            ..Self::default()
        }
    }

    /// Disable or enable every input and the submit control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Validation error from the last submission, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.disabled {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validate the current inputs.
    ///
    /// On success the local error is cleared and the validated request is
    /// returned. A disabled form refuses with [`FormError::Busy`] and leaves
    /// its error untouched.
    pub fn submit(&mut self) -> Result<SearchRequest, FormError> {
        if self.disabled {
            return Err(FormError::Busy);
        }

        match SearchRequest::new(&self.keyword, self.filters) {
            Ok(request) => {
                self.error = None;
                Ok(request)
            }
            Err(e) => {
                tracing::debug!(error = %e, "search form rejected input");
                self.error = Some(e.clone());
                Err(FormError::Invalid(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_valid() {
        let mut form = FilterForm::with_values("mouse", SearchFilters::default());
        let request = form.submit().unwrap();
        assert_eq!(request.keyword(), "mouse");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_submit_records_error() {
        let mut form = FilterForm::with_values(
            "mouse",
            SearchFilters {
                min_price: 200.0,
                max_price: 100.0,
                ..SearchFilters::default()
            },
        );

        let err = form.submit().unwrap_err();
        assert!(matches!(err, FormError::Invalid(ValidationError::InvertedPriceRange { .. })));
        assert!(form.error().is_some());

        form.filters.min_price = 0.0;
        assert!(form.submit().is_ok());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_disabled_form_is_busy() {
        let mut form = FilterForm::with_values("mouse", SearchFilters::default());
        form.set_disabled(true);
        assert_eq!(form.submit(), Err(FormError::Busy));
        assert_eq!(form.submit_label(), SUBMIT_LABEL_BUSY);

        form.set_disabled(false);
        assert!(form.submit().is_ok());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_error_message_is_user_facing() {
        let mut form = FilterForm::new();
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a search keyword");
    }
}

//! The search collaborator contract.

use async_trait::async_trait;
use finder_core::{RecentSearchList, SearchRequest, SearchResponse};

use crate::error::RequestError;

/// A search backend: the remote API or an in-memory stand-in.
///
/// Implementations own timeouts. They never retry.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Run a fresh search and return its first page.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, RequestError>;

    /// Fetch `page` (1-indexed) of the last search this backend ran.
    async fn page(&self, page: u32) -> Result<SearchResponse, RequestError>;

    /// Prior keywords, most recent first.
    async fn recent_searches(&self) -> Result<RecentSearchList, RequestError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: SearchApi + ?Sized> SearchApi for Box<T> {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, RequestError> {
        (**self).search(request).await
    }

    async fn page(&self, page: u32) -> Result<SearchResponse, RequestError> {
        (**self).page(page).await
    }

    async fn recent_searches(&self) -> Result<RecentSearchList, RequestError> {
        (**self).recent_searches().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

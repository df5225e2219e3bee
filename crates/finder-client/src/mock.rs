//! In-memory search backend over the mock catalog.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use finder_core::{MockCatalog, RecentSearchList, SearchRequest, SearchResponse};
use http::StatusCode;
use tracing::debug;

use crate::api::SearchApi;
use crate::error::RequestError;

/// Most keywords the mock remembers.
pub const RECENT_SEARCH_LIMIT: usize = 10;

/// Path the mock's `next`/`previous` links point at.
const LINK_BASE: &str = "/api/search/";

/// Server-side session the mock keeps between calls.
#[derive(Debug, Default)]
struct Session {
    last_query: Option<SearchRequest>,
    recent: RecentSearchList,
}

/// Search backend that filters the mock catalog in memory.
///
/// Behaves like the remote API: it remembers the last query for paged
/// fetches, records recent keywords, and answers 404 for pages it does not
/// have. Every call waits `latency` first.
#[derive(Debug)]
pub struct MockSearchApi {
    catalog: MockCatalog,
    latency: Duration,
    session: Mutex<Session>,
}

impl MockSearchApi {
    pub fn new(catalog: MockCatalog) -> Self {
        Self {
            catalog,
            latency: Duration::ZERO,
            session: Mutex::new(Session::default()),
        }
    }

    /// Simulated network latency per call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn not_found(page: u32) -> RequestError {
        RequestError::Http {
            status: StatusCode::NOT_FOUND,
            url: format!("{}?page={}", LINK_BASE, page),
        }
    }
}

impl Default for MockSearchApi {
    fn default() -> Self {
        Self::new(MockCatalog::default()).with_latency(Duration::from_millis(1000))
    }
}

#[async_trait]
impl SearchApi for MockSearchApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, RequestError> {
        self.delay().await;

        let response = self.catalog.page(request, 1, LINK_BASE)?;
        debug!(keyword = request.keyword(), count = response.count, "mock search");

        let mut session = self.session();
        session.recent.record(request.keyword(), RECENT_SEARCH_LIMIT);
        session.last_query = Some(request.clone());

        Ok(response)
    }

    async fn page(&self, page: u32) -> Result<SearchResponse, RequestError> {
        self.delay().await;

        let query = self.session().last_query.clone();
        let Some(query) = query else {
            return Err(Self::not_found(page));
        };
        self.catalog
            .page(&query, page, LINK_BASE)
            .map_err(|_| Self::not_found(page))
    }

    async fn recent_searches(&self) -> Result<RecentSearchList, RequestError> {
        self.delay().await;
        Ok(self.session().recent.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

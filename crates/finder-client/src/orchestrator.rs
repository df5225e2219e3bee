//! Search request lifecycle.
//!
//! The orchestrator is the single owner of [`SearchState`]. It moves the state
//! through `Idle -> Loading -> {Success, Failure}` around each collaborator
//! call, and decides what a late response may still change.

use std::sync::{Mutex, MutexGuard, PoisonError};

use finder_core::{FilterForm, FormError, Pagination, SearchRequest, SearchState, Ticket};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::SearchApi;

/// What happens to a response that resolves after a newer request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Drop it. Only the latest issued request may change the state.
    #[default]
    Discard,
    /// Apply it anyway. Whichever response resolves last wins.
    LastResolvedWins,
}

impl StalePolicy {
    /// The name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            StalePolicy::Discard => "discard",
            StalePolicy::LastResolvedWins => "last_resolved_wins",
        }
    }
}

/// How one `search` or `change_page` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was applied to the state.
    Applied,
    /// The call failed and the error was recorded.
    Failed,
    /// A newer request was issued; this response was dropped.
    Discarded,
    /// Nothing was requested (no prior search, or page out of range).
    Ignored,
}

/// Owns the search state and runs requests against a [`SearchApi`].
///
/// The state lock is never held across an await, so concurrent calls
/// interleave only at the collaborator boundary.
#[derive(Debug)]
pub struct SearchOrchestrator<A> {
    api: A,
    state: Mutex<SearchState>,
    stale_policy: StalePolicy,
}

impl<A: SearchApi> SearchOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(SearchState::new()),
            stale_policy: StalePolicy::default(),
        }
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn accepts(&self, state: &SearchState, ticket: Ticket) -> bool {
        match self.stale_policy {
            StalePolicy::Discard => state.is_latest(ticket),
            StalePolicy::LastResolvedWins => true,
        }
    }

    /// Validate the form and search with it.
    ///
    /// The form is disabled for as long as a request is in flight, and a
    /// submission made while it is disabled is refused.
    pub async fn submit(&self, form: &mut FilterForm) -> Result<Outcome, FormError> {
        form.set_disabled(self.is_loading());
        let request = form.submit()?;

        form.set_disabled(true);
        let outcome = self.search(&request).await;
        form.set_disabled(self.is_loading());

        Ok(outcome)
    }

    /// Run a fresh search. Resets to page 1 and refreshes recent searches.
    pub async fn search(&self, request: &SearchRequest) -> Outcome {
        let ticket = self.state().begin_search(request.keyword());
        info!(
            keyword = request.keyword(),
            seq = ticket.seq(),
            backend = self.api.name(),
            "search started"
        );

        let result = self.api.search(request).await;

        {
            let mut state = self.state();
            if !self.accepts(&state, ticket) {
                debug!(seq = ticket.seq(), "discarding stale search response");
                return Outcome::Discarded;
            }

            match result {
                Ok(response) => {
                    info!(
                        keyword = request.keyword(),
                        count = response.count,
                        seq = ticket.seq(),
                        "search completed"
                    );
                    state.complete_search(response);
                }
                Err(e) => {
                    warn!(keyword = request.keyword(), error = %e, "search failed");
                    state.fail(e.to_string());
                    return Outcome::Failed;
                }
            }
        }

        self.refresh_recent_searches(ticket).await;
        Outcome::Applied
    }

    /// Move to another page of the current result set.
    ///
    /// Leaves page counts and recent searches alone. Ignored before the first
    /// search and for pages outside `1..=total_pages`.
    pub async fn change_page(&self, page: u32) -> Outcome {
        let ticket = {
            let mut state = self.state();
            if !state.has_searched() {
                warn!(page, "page change before any search; ignoring");
                return Outcome::Ignored;
            }
            if let Err(e) = Pagination::new(state.current_page(), state.total_pages()).check(page) {
                warn!(error = %e, "ignoring page change");
                return Outcome::Ignored;
            }
            state.begin_page()
        };
        info!(page, seq = ticket.seq(), "page change started");

        let result = self.api.page(page).await;

        let mut state = self.state();
        if !self.accepts(&state, ticket) {
            debug!(seq = ticket.seq(), page, "discarding stale page response");
            return Outcome::Discarded;
        }

        match result {
            Ok(response) => {
                debug!(page, items = response.results.len(), "page change completed");
                state.complete_page(page, response);
                Outcome::Applied
            }
            Err(e) => {
                warn!(page, error = %e, "page change failed");
                state.fail(e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Best-effort refresh of the recent-search list. Failures are logged only.
    ///
    /// Page changes issued meanwhile do not make the list stale; only a newer
    /// search does.
    async fn refresh_recent_searches(&self, ticket: Ticket) {
        match self.api.recent_searches().await {
            Ok(recent) => {
                let mut state = self.state();
                let current = match self.stale_policy {
                    StalePolicy::Discard => state.is_latest_search(ticket),
                    StalePolicy::LastResolvedWins => true,
                };
                if current {
                    state.set_recent_searches(recent);
                } else {
                    debug!(seq = ticket.seq(), "discarding stale recent searches");
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to refresh recent searches");
            }
        }
    }
}

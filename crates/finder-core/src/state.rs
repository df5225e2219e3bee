//! Observable search UI state and its transitions.
//!
//! ```text
//! Idle --begin_search/begin_page--> Loading --complete_*--> Success
//!                                           \--fail-------> Failure
//! ```
//!
//! Both terminal states return to `Loading` on the next `begin_*`. Every
//! `begin_*` issues a [`Ticket`]; the caller decides whether a response
//! carrying an older ticket may still be applied. Results live in one
//! [`SearchResultPage`] that each successful response replaces whole.

use serde::Serialize;

use crate::page::{total_pages, SearchResponse, SearchResultPage, PAGE_SIZE};
use crate::product::Product;
use crate::recent::RecentSearchList;

/// Sequence number of one search or page request, plus the search it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket {
    seq: u64,
    search: u64,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Sequence number of the search this request belongs to.
    pub fn search(&self) -> u64 {
        self.search
    }
}

/// Coarse lifecycle position, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing in flight; last request (if any) succeeded.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed.
    Failed,
}

/// Everything the form and the results presenter read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    is_loading: bool,
    has_searched: bool,
    page: SearchResultPage,
    total_pages: u32,
    recent_searches: RecentSearchList,
    error: Option<String>,
    keyword: Option<String>,
    #[serde(skip)]
    issued: u64,
    #[serde(skip)]
    searches: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn results(&self) -> &[Product] {
        &self.page.items
    }

    /// The page of results currently shown.
    pub fn page(&self) -> &SearchResultPage {
        &self.page
    }

    /// Current page, 1-indexed. Zero before the first search.
    pub fn current_page(&self) -> u32 {
        self.page.page_index
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_count(&self) -> u64 {
        self.page.total_count
    }

    pub fn recent_searches(&self) -> &RecentSearchList {
        &self.recent_searches
    }

    /// Message of the last failed request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Keyword of the last search started.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.seq == self.issued
    }

    /// Whether no search was started after the one `ticket` belongs to.
    /// Page requests issued since then do not count.
    pub fn is_latest_search(&self, ticket: Ticket) -> bool {
        ticket.search == self.searches
    }

    /// Enter `Loading` for a fresh keyword search.
    pub fn begin_search(&mut self, keyword: &str) -> Ticket {
        self.has_searched = true;
        self.page.page_index = 1;
        self.keyword = Some(keyword.to_string());
        self.searches += 1;
        self.begin()
    }

    /// Enter `Loading` for a page change of the current result set.
    pub fn begin_page(&mut self) -> Ticket {
        self.begin()
    }

    fn begin(&mut self) -> Ticket {
        self.is_loading = true;
        self.error = None;
        self.issued += 1;
        Ticket {
            seq: self.issued,
            search: self.searches,
        }
    }

    /// Apply a successful search response. Replaces results and page counts.
    pub fn complete_search(&mut self, response: SearchResponse) {
        self.total_pages = total_pages(response.count, PAGE_SIZE);
        self.page = response.into_page(1);
        self.is_loading = false;
    }

    /// Apply a successful page response. Counts are left as they were.
    pub fn complete_page(&mut self, page: u32, response: SearchResponse) {
        self.page = SearchResultPage {
            total_count: self.page.total_count,
            ..response.into_page(page)
        };
        self.is_loading = false;
    }

    /// Record a failure. Prior results stay as they were.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }

    pub fn set_recent_searches(&mut self, recent: RecentSearchList) {
        self.recent_searches = recent;
    }
}

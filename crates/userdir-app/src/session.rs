//! Listing session state
//!
//! A [`ListingSession`] owns the current batch and everything derived from
//! it: the committed search query, the filtered set, the page and the card
//! cursor. It is mutated only through the methods below, which the update
//! handler calls in response to messages.

use std::sync::Arc;

use crate::message::RequestId;
use userdir_core::{
    clamp_page, filter, paginate, total_pages, Gender, Page, UserRecord, PAGE_SIZE,
};

/// Which listing control receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFocus {
    #[default]
    Cards,
    Search,
}

/// Default number of card columns until the renderer reports the real value
pub const DEFAULT_GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub struct ListingSession {
    batch: Vec<Arc<UserRecord>>,
    filtered: Vec<Arc<UserRecord>>,

    loading: bool,
    error: Option<String>,
    gender: Option<Gender>,

    /// Text visible in the search field
    search_input: String,
    /// Query the filtered set was derived from
    query: String,
    search_generation: u64,

    page: usize,
    /// Index of the highlighted card within the current page
    cursor: usize,
    pub focus: ListingFocus,
    /// Cards per grid row, written by the renderer
    pub grid_columns: usize,

    pending_request: Option<RequestId>,
    last_request_id: u64,
    started: bool,
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSession {
    pub fn new() -> Self {
        Self {
            batch: Vec::new(),
            filtered: Vec::new(),
            loading: false,
            error: None,
            gender: None,
            search_input: String::new(),
            query: String::new(),
            search_generation: 0,
            page: 1,
            cursor: 0,
            focus: ListingFocus::default(),
            grid_columns: DEFAULT_GRID_COLUMNS,
            pending_request: None,
            last_request_id: 0,
            started: false,
        }
    }

    /// Session with a preselected gender filter (applied on the first fetch)
    pub fn with_gender(gender: Option<Gender>) -> Self {
        Self {
            gender,
            ..Self::new()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Fetch lifecycle
    // ─────────────────────────────────────────────────────────

    /// True until the first fetch has been issued
    pub fn needs_fetch(&self) -> bool {
        !self.started
    }

    /// Issue a new request token. Any earlier in-flight request becomes stale.
    pub fn begin_fetch(&mut self) -> RequestId {
        self.last_request_id += 1;
        let id = RequestId(self.last_request_id);
        self.pending_request = Some(id);
        self.loading = true;
        self.error = None;
        self.started = true;
        id
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    /// True when `id` is not the request the session is waiting for
    pub fn is_stale(&self, id: RequestId) -> bool {
        self.pending_request != Some(id)
    }

    /// Replace the batch with a completed fetch.
    ///
    /// Returns `false` (and changes nothing) for a stale response.
    pub fn apply_batch(&mut self, id: RequestId, records: Vec<UserRecord>) -> bool {
        if self.is_stale(id) {
            return false;
        }
        self.pending_request = None;
        self.loading = false;
        self.error = None;
        self.batch = records.into_iter().map(Arc::new).collect();
        self.page = 1;
        self.cursor = 0;
        self.refilter();
        true
    }

    /// Record a failed fetch. The previous batch, if any, is kept.
    ///
    /// Returns `false` (and changes nothing) for a stale response.
    pub fn apply_failure(&mut self, id: RequestId, error: String) -> bool {
        if self.is_stale(id) {
            return false;
        }
        self.pending_request = None;
        self.loading = false;
        self.error = Some(error);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Gender filter
    // ─────────────────────────────────────────────────────────

    /// Change the server-side filter.
    ///
    /// Returns `true` when the caller must fetch a new batch. Selecting the
    /// filter that is already active on a started session does nothing.
    pub fn set_gender(&mut self, gender: Option<Gender>) -> bool {
        if self.started && self.gender == gender {
            return false;
        }
        self.gender = gender;
        self.batch.clear();
        self.filtered.clear();
        self.page = 1;
        self.cursor = 0;
        true
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────

    /// Update the visible search text and return its keystroke generation
    pub fn edit_search(&mut self, text: String) -> u64 {
        self.search_input = text;
        self.search_generation += 1;
        self.search_generation
    }

    /// Apply a debounced search commit.
    ///
    /// Commits from superseded keystrokes are ignored and return `false`. The
    /// current page is kept and clamped into the new page range.
    pub fn commit_search(&mut self, generation: u64, text: String) -> bool {
        if generation != self.search_generation {
            return false;
        }
        if text != self.query {
            self.query = text;
            self.refilter();
            self.page = clamp_page(self.page, self.total_pages());
            self.clamp_cursor();
        }
        true
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_generation(&self) -> u64 {
        self.search_generation
    }

    /// "Found N result(s) for "q"" while a query is committed
    pub fn result_summary(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let n = self.filtered.len();
        let plural = if n == 1 { "" } else { "s" };
        Some(format!("Found {n} result{plural} for \"{}\"", self.query))
    }

    // ─────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────

    pub fn current_page(&self) -> Page<'_, Arc<UserRecord>> {
        paginate(&self.filtered, self.page, PAGE_SIZE)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), PAGE_SIZE)
    }

    /// Jump to a page (clamped) and move the cursor to the first card
    pub fn go_to_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
        self.cursor = 0;
    }

    // ─────────────────────────────────────────────────────────
    // Card cursor
    // ─────────────────────────────────────────────────────────

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor by `delta` cards, stopping at the page edges
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.current_page().items.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    /// Record under the cursor
    pub fn selected(&self) -> Option<Arc<UserRecord>> {
        self.current_page().items.get(self.cursor).cloned()
    }

    fn clamp_cursor(&mut self) {
        let len = self.current_page().items.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    // ─────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn batch(&self) -> &[Arc<UserRecord>] {
        &self.batch
    }

    pub fn filtered(&self) -> &[Arc<UserRecord>] {
        &self.filtered
    }

    fn refilter(&mut self) {
        self.filtered = filter(&self.batch, &self.query);
    }
}

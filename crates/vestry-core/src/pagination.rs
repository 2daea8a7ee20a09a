use serde::{Deserialize, Serialize};

/// Query for one page of an entity listing.
///
/// `page` is 0-based; `size` is the fixed page length of the screen.
/// An absent `status` means "all statuses"; a present one narrows the
/// listing to exactly that token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: i64,
    pub size: i64,
    pub status: Option<String>,
}

impl PageQuery {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page,
            size,
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Get the page, clamped to be non-negative.
    pub fn page(&self) -> i64 {
        self.page.max(0)
    }

    /// Get the page size, clamped between 1 and 100.
    pub fn size(&self) -> i64 {
        self.size.clamp(1, 100)
    }

    /// Encode as query-string pairs the backend expects:
    /// `page`, `size`, and `status` when a filter is set.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page().to_string()),
            ("size", self.size().to_string()),
        ];
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

/// One page of entity records plus the server-side filtered total.
///
/// `total_records` reflects the count matching the filter across all
/// pages, not the length of `rows`.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_records: i64,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, total_records: i64) -> Self {
        Self {
            rows,
            total_records: total_records.max(0),
        }
    }

    /// The degraded result every failed list read collapses to.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_records: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total pages at the given page size: `ceil(total_records / size)`.
    pub fn total_pages(&self, size: i64) -> i64 {
        let size = size.max(1);
        (self.total_records + size - 1) / size
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The three pieces of state a list screen owns, as pure logic.
///
/// Screens hold one of these, call [`PageState::query`] whenever `page`
/// or the filter changes, and replace their rows with the result.
/// Changing the filter always resets the page to 0 so the narrowed
/// listing never opens on a page past its own end.
#[derive(Debug, Clone)]
pub struct PageState {
    page: i64,
    size: i64,
    status_filter: Option<String>,
}

impl PageState {
    pub fn new(size: i64) -> Self {
        Self {
            page: 0,
            size: size.clamp(1, 100),
            status_filter: None,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    /// Request a page change, clamped to `[0, total_pages - 1]`.
    pub fn set_page(&mut self, page: i64, total_pages: i64) {
        let last = (total_pages - 1).max(0);
        self.page = page.clamp(0, last);
    }

    /// Change the status filter. Resets the page to 0.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.status_filter = filter;
        self.page = 0;
    }

    /// The query for the screen's current state.
    pub fn query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            size: self.size,
            status: self.status_filter.clone(),
        }
    }
}

//! Listing queries: status filter, free-text search, newest-first ordering and
//! page slicing over an already loaded record list.

use crate::store::contract::{Domain, Lifecycle};
use crate::store::record::Record;
use serde::Serialize;
use std::fmt;

/// Status filter for listings and counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Lifecycle> StatusFilter<S> {
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl<S> From<Option<S>> for StatusFilter<S> {
    fn from(status: Option<S>) -> Self {
        match status {
            Some(s) => StatusFilter::Only(s),
            None => StatusFilter::All,
        }
    }
}

pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Listing request. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<S> {
    pub status: StatusFilter<S>,
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl<S> Default for ListQuery<S> {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl<S> ListQuery<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: S) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One page of a listing
#[derive(Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = ""))]
pub struct Page<D: Domain> {
    pub records: Vec<Record<D>>,
    /// Matching records across all pages
    pub total: usize,
    pub pages: usize,
    pub page: usize,
    pub limit: usize,
}

impl<D: Domain> Clone for Page<D> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            total: self.total,
            pages: self.pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

impl<D: Domain> fmt::Debug for Page<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("records", &self.records)
            .field("total", &self.total)
            .field("pages", &self.pages)
            .field("page", &self.page)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Case-insensitive substring match over the domain's search fields and the
/// sequence code. `needle` must already be lowercase.
pub fn matches_search<D: Domain>(record: &Record<D>, needle: &str) -> bool {
    if record.sequence_code.to_lowercase().contains(needle) {
        return true;
    }
    D::search_fields(&record.fields)
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Apply status and search filters (AND'ed).
pub fn filter<D: Domain>(
    records: Vec<Record<D>>,
    status: &StatusFilter<D::Status>,
    search: Option<&str>,
) -> Vec<Record<D>> {
    // whitespace is part of the needle; only an empty needle is dropped
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);
    records
        .into_iter()
        .filter(|r| status.matches(&r.status))
        .filter(|r| match &needle {
            Some(n) => matches_search(r, n),
            None => true,
        })
        .collect()
}

/// Order by `created_at` descending; ties go to the most recently appended.
pub fn sort_newest_first<D: Domain>(records: &mut Vec<Record<D>>) {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Number of pages needed for `total` records; zero when `limit` is zero.
pub fn page_count(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Filter, sort and slice a loaded list.
///
/// Pages past the end produce an empty slice. Page 0 is read as page 1.
pub fn select<D: Domain>(records: Vec<Record<D>>, query: &ListQuery<D::Status>) -> Page<D> {
    let mut matched = filter(records, &query.status, query.search.as_deref());
    let total = matched.len();
    sort_newest_first(&mut matched);

    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(query.limit);
    let records = matched
        .into_iter()
        .skip(start)
        .take(query.limit)
        .collect();

    Page {
        records,
        total,
        pages: page_count(total, query.limit),
        page,
        limit: query.limit,
    }
}

//! Listing pipeline: batch → filtered set → page
//!
//! Both stages are pure functions so the session can recompute them
//! deterministically whenever the batch, the committed query or the page
//! changes.

use std::borrow::Borrow;

use crate::types::UserRecord;

/// Number of records shown per page
pub const PAGE_SIZE: usize = 12;

/// Check whether a record matches a search query.
///
/// Case-insensitive substring match against "first last", the email and the
/// username. An empty query matches everything.
pub fn matches(record: &UserRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(record, &query.to_lowercase())
}

fn matches_lowered(record: &UserRecord, needle: &str) -> bool {
    record.name.full().to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
        || record.username().to_lowercase().contains(needle)
}

/// Derive the filtered set from a batch, preserving batch order.
///
/// Works over owned records, references or `Arc`s alike.
pub fn filter<T>(batch: &[T], query: &str) -> Vec<T>
where
    T: Borrow<UserRecord> + Clone,
{
    if query.is_empty() {
        return batch.to_vec();
    }
    let needle = query.to_lowercase();

    batch
        .iter()
        .filter(|record| {
            matches_lowered(<T as Borrow<UserRecord>>::borrow(record), &needle)
        })
        .cloned()
        .collect()
}

/// Total pages needed for `count` items (0 when there are no items)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of the filtered set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on this page, in filtered-set order
    pub items: &'a [T],
    /// Effective 1-based page number after clamping
    pub page: usize,
    /// Total number of pages (0 when the filtered set is empty)
    pub total_pages: usize,
    /// Size of the whole filtered set
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// True when there is nothing to show; callers render an empty state
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// 0-based index of the first item of this page within the filtered set
    pub fn offset(&self, page_size: usize) -> usize {
        (self.page - 1) * page_size
    }
}

/// Slice the filtered set into a fixed-size, 1-based page.
///
/// Out-of-range pages (e.g. a stale page number after the filtered set shrank)
/// are clamped before slicing.
pub fn paginate<T>(filtered: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_items = filtered.len();
    let total_pages = total_pages(total_items, page_size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    Page {
        items: &filtered[start..end],
        page,
        total_pages,
        total_items,
    }
}

//! Pagination control windowing
//!
//! Produces the bounded sequence of page labels shown beneath the listing.

/// One entry of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A selectable 1-based page number
    Page(usize),
    /// A gap marker ("...")
    Ellipsis,
}

impl std::fmt::Display for PageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{n}"),
            PageLabel::Ellipsis => f.write_str("..."),
        }
    }
}

/// Largest page count rendered without ellipses
const MAX_UNWINDOWED: usize = 7;

/// Compute the page labels for the current position.
///
/// - up to 7 pages: every page
/// - near the start: `1..=5, ..., last`
/// - near the end: `1, ..., last-4..=last`
/// - otherwise: `1, ..., current-1..=current+1, ..., last`
pub fn page_labels(current: usize, total: usize) -> Vec<PageLabel> {
    if total <= MAX_UNWINDOWED {
        return (1..=total).map(PageLabel::Page).collect();
    }

    let mut labels = Vec::with_capacity(MAX_UNWINDOWED);
    if current <= 3 {
        labels.extend((1..=5).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total));
    } else if current >= total - 2 {
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Ellipsis);
        labels.extend((total - 4..=total).map(PageLabel::Page));
    } else {
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Ellipsis);
        labels.extend((current - 1..=current + 1).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total));
    }
    labels
}

/// Previous control is enabled everywhere except the first page
pub fn has_previous(current: usize) -> bool {
    current != 1
}

/// Next control is enabled everywhere except the last page
pub fn has_next(current: usize, total: usize) -> bool {
    current != total
}

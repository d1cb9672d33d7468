//! Screen layout definitions for the TUI
//!
//! The header is a fixed glass container on every screen. The listing body
//! stacks the search field, the gender filter, the result summary, an
//! optional error banner, the card grid and an optional pagination row.

use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const ERROR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, route path and keybindings
    pub header: Rect,
    /// Listing or profile content
    pub body: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
    }
}

/// Areas of the listing body
#[derive(Debug, Clone, Copy)]
pub struct ListingAreas {
    pub search: Rect,
    pub filter: Rect,
    pub summary: Rect,
    pub error: Option<Rect>,
    /// Card grid, loading indicator or empty state
    pub content: Rect,
    pub pagination: Option<Rect>,
}

/// Split the listing body; rows for the error banner and pagination are only
/// reserved when they are shown
pub fn listing(area: Rect, has_error: bool, has_pagination: bool) -> ListingAreas {
    let mut constraints = vec![
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Length(1), // Gender filter
        Constraint::Length(1), // Result summary
    ];
    if has_error {
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    constraints.push(Constraint::Min(1));
    if has_pagination {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::vertical(constraints).split(area);
    // Index of the content chunk shifts by one when the error row is present
    let content_index = if has_error { 4 } else { 3 };
    let error = has_error.then(|| chunks[3]);
    let content = chunks[content_index];
    let pagination = has_pagination.then(|| chunks[content_index + 1]);

    ListingAreas {
        search: chunks[0],
        filter: chunks[1],
        summary: chunks[2],
        error,
        content,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 21);
    }

    #[test]
    fn test_listing_without_error_or_pagination() {
        let layout = listing(Rect::new(0, 3, 80, 37), false, false);

        assert_eq!(layout.search, Rect::new(0, 3, 80, 3));
        assert_eq!(layout.filter.y, 6);
        assert_eq!(layout.summary.y, 7);
        assert!(layout.error.is_none());
        assert!(layout.pagination.is_none());
        assert_eq!(layout.content.y, 8);
        assert_eq!(layout.content.height, 32);
    }

    #[test]
    fn test_listing_with_error_and_pagination() {
        let layout = listing(Rect::new(0, 3, 80, 37), true, true);

        let error = layout.error.unwrap();
        assert_eq!(error.y, 8);
        assert_eq!(error.height, 3);
        assert_eq!(layout.content.y, 11);
        assert_eq!(layout.content.height, 28);

        let pagination = layout.pagination.unwrap();
        assert_eq!(pagination.y, 39);
        assert_eq!(pagination.height, 1);
    }

    #[test]
    fn test_small_terminal() {
        let area = Rect::new(0, 0, 40, 10);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.height, 7);
    }
}

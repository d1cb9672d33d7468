//! Widget components for the directory screens

mod gender_filter;
mod header;
mod pagination;
mod profile;
mod search_input;
mod status;
mod user_card;
mod user_grid;

pub use gender_filter::GenderFilter;
pub use header::MainHeader;
pub use pagination::{pagination_line, PaginationBar};
pub use profile::{format_long_date, NotFound, ProfileView};
pub use search_input::SearchInput;
pub use status::{EmptyState, ErrorBanner, LoadingIndicator, ResultSummary};
pub use user_card::{UserCard, CARD_HEIGHT};
pub use user_grid::{columns_for_width, UserGrid};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, ending in "..."
/// when shortened. Wide characters are measured by display width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_with_ellipsis("Test", 3), "...");
        assert_eq!(truncate_with_ellipsis("Test", 0), "");
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 9), "日本語...");
    }
}

//! Pagination control shown beneath the card grid

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use userdir_core::{has_next, has_previous, page_labels, PageLabel};

use crate::theme::styles;

/// Build the control line, e.g. `< Prev [1] 2 3 4 5 ... 10 Next >`
pub fn pagination_line(current: usize, total: usize) -> Line<'static> {
    let control_style = |enabled: bool| -> Style {
        if enabled {
            styles::accent()
        } else {
            styles::text_muted()
        }
    };

    let mut spans = vec![Span::styled("< Prev", control_style(has_previous(current)))];

    for label in page_labels(current, total) {
        spans.push(Span::raw(" "));
        match label {
            PageLabel::Page(n) if n == current => {
                spans.push(Span::styled(format!("[{n}]"), styles::focused_selected()));
            }
            PageLabel::Page(n) => {
                spans.push(Span::styled(n.to_string(), styles::text_secondary()));
            }
            PageLabel::Ellipsis => {
                spans.push(Span::styled(label.to_string(), styles::text_muted()));
            }
        }
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled("Next >", control_style(has_next(current, total))));
    Line::from(spans)
}

pub struct PaginationBar {
    current: usize,
    total: usize,
}

impl PaginationBar {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }
}

impl Widget for PaginationBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // A single page needs no control
        if self.total <= 1 {
            return;
        }
        Paragraph::new(pagination_line(self.current, self.total))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

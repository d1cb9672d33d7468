//! Loading, error, empty and summary indicators for the listing

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rect of height `height` vertically centered in `area`
fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

pub struct LoadingIndicator {
    frame: usize,
}

impl LoadingIndicator {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spinner = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, styles::accent()),
            Span::raw(" "),
            Span::styled("Loading users...", styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered_rows(area, 1), buf);
    }
}

/// Inline error panel with a retry hint
pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.message, styles::error_text()),
            Span::raw("  "),
            Span::styled("[r]", styles::keybinding()),
            Span::styled(" Retry", styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .block(styles::error_block().title(" Error "))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

pub struct EmptyState;

impl Widget for EmptyState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled("No users found", styles::text_muted()))
            .alignment(Alignment::Center)
            .render(centered_rows(area, 1), buf);
    }
}

/// `Found N result(s) for "q"` line
pub struct ResultSummary<'a> {
    text: &'a str,
}

impl<'a> ResultSummary<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for ResultSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(self.text, styles::text_secondary())).render(area, buf);
    }
}

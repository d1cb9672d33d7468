//! Test utilities for TUI rendering verification
//!
//! Widgets and full screens are rendered into ratatui's `TestBackend` and
//! asserted on as plain text.

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use userdir_app::message::Message;
use userdir_app::state::AppState;
use userdir_app::{handler, UpdateAction};
use userdir_core::{Gender, UserRecord};
use userdir_source::test_utils::test_batch;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Content of one row with trailing spaces removed
    pub fn line(&self, y: u16) -> String {
        get_line_content(self.buffer(), y).trim_end().to_string()
    }

    /// Index of the first row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|&y| get_line_content(self.buffer(), y).contains(text))
    }

    /// All content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// State after the first fetch resolved with `records`
pub fn loaded_state(records: Vec<UserRecord>) -> AppState {
    let mut state = AppState::new();
    let result = handler::update(&mut state, Message::Started);
    if let Some(UpdateAction::FetchUsers { request_id, .. }) = result.action {
        handler::update(
            &mut state,
            Message::UsersLoaded {
                request_id,
                records,
            },
        );
    }
    state
}

/// State with `count` male test users loaded
pub fn loaded_male_state(count: usize) -> AppState {
    loaded_state(test_batch(count, Gender::Male))
}

/// Apply `msg` and every follow-up message it produces, returning the last
/// action requested
pub fn dispatch(state: &mut AppState, msg: Message) -> Option<UpdateAction> {
    let mut next = Some(msg);
    let mut action = None;
    while let Some(msg) = next.take() {
        let result = handler::update(state, msg);
        next = result.message;
        if result.action.is_some() {
            action = result.action;
        }
    }
    action
}

/// Commit a search query without going through the debounce timer
pub fn commit_search(state: &mut AppState, text: &str) {
    let result = handler::update(state, Message::SearchInputChanged(text.to_string()));
    if let Some(UpdateAction::ScheduleSearchCommit { generation, text }) = result.action {
        handler::update(state, Message::SearchCommitted { generation, text });
    }
}

pub fn record(index: usize, first: &str, last: &str, gender: Gender) -> Arc<UserRecord> {
    Arc::new(userdir_source::test_utils::test_user(index, first, last, gender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains_and_line() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.line(0), "Hello World");
        assert_eq!(term.find_line("World"), Some(0));
    }

    #[test]
    fn test_loaded_male_state() {
        let state = loaded_male_state(4);
        assert_eq!(state.listing.batch().len(), 4);
        assert!(!state.listing.is_loading());
    }
}

//! Search field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const PLACEHOLDER: &str = "Search by name, email, or username...";

pub struct SearchInput<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("/ ", styles::keybinding())];

        if self.text.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.text, styles::text_primary()));
        }

        if self.focused {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        if !self.text.is_empty() {
            spans.push(Span::styled("  (Ctrl+U to clear)", styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

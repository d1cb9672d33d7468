//! Header bar widget
//!
//! Shows the app title, the logical route path and the key hints for the
//! current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use userdir_app::state::UiMode;

use crate::theme::{palette, styles};

const TITLE: &str = "Users Directory";

pub struct MainHeader<'a> {
    path: &'a str,
    mode: UiMode,
}

impl<'a> MainHeader<'a> {
    pub fn new(path: &'a str, mode: UiMode) -> Self {
        Self { path, mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Listing => &[
                ("/", "search"),
                ("a/m/f", "gender"),
                ("Enter", "open"),
                ("n/p", "page"),
                ("q", "quit"),
            ],
            UiMode::SearchInput => &[("Esc", "done"), ("Ctrl+U", "clear")],
            UiMode::Profile => &[("Esc", "back"), ("↑↓", "scroll"), ("q", "quit")],
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(self.path, styles::text_muted()),
        ]);
        let title_width = title.width() as u16;
        Paragraph::new(title).render(inner, buf);

        let mut hint_spans = Vec::new();
        for (i, (key, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                hint_spans.push(Span::raw("  "));
            }
            hint_spans.push(Span::styled(*key, styles::keybinding()));
            hint_spans.push(Span::raw(" "));
            hint_spans.push(Span::styled(*label, styles::text_secondary()));
        }
        let hints = Line::from(hint_spans);
        let hints_width = hints.width() as u16;

        // Only show hints when they fit beside the title
        if title_width + 2 + hints_width <= inner.width {
            let hints_area = Rect {
                x: inner.x + inner.width - hints_width,
                y: inner.y,
                width: hints_width,
                height: 1,
            };
            Paragraph::new(hints).render(hints_area, buf);
        }
    }
}

//! Gender filter selector

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use userdir_core::Gender;

use crate::theme::styles;

const OPTIONS: [(Option<Gender>, &str, &str); 3] = [
    (None, "a", "All Users"),
    (Some(Gender::Male), "m", "Male"),
    (Some(Gender::Female), "f", "Female"),
];

pub struct GenderFilter {
    selected: Option<Gender>,
}

impl GenderFilter {
    pub fn new(selected: Option<Gender>) -> Self {
        Self { selected }
    }
}

impl Widget for GenderFilter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("Filter by Gender:", styles::text_bright_bold())];

        for (value, key, label) in OPTIONS {
            spans.push(Span::raw("  "));
            let style = if value == self.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" [{key}] {label} "), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_options_rendered() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(GenderFilter::new(None), term.area());

        insta::assert_snapshot!(term.line(0), @"Filter by Gender:   [a] All Users    [m] Male    [f] Female");
    }

    #[test]
    fn test_selected_option_is_highlighted() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(GenderFilter::new(Some(Gender::Female)), term.area());

        let x = term.line(0).find("[f]").unwrap() as u16;
        assert_eq!(term.buffer()[(x, 0)].bg, palette::ACCENT);

        let x = term.line(0).find("[a]").unwrap() as u16;
        assert_ne!(term.buffer()[(x, 0)].bg, palette::ACCENT);
    }
}

//! One user summary card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use userdir_core::UserRecord;

use super::truncate_with_ellipsis;
use crate::theme::styles;

/// Rendered card height including borders
pub const CARD_HEIGHT: u16 = 7;

pub struct UserCard<'a> {
    record: &'a UserRecord,
    selected: bool,
}

impl<'a> UserCard<'a> {
    pub fn new(record: &'a UserRecord) -> Self {
        Self {
            record,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for UserCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        if width == 0 {
            return;
        }

        let record = self.record;
        let name_style = if self.selected {
            styles::accent_bold()
        } else {
            styles::text_bright_bold()
        };

        let badge = record.gender.label();
        let handle_width = width.saturating_sub(badge.width() + 2);
        let handle = truncate_with_ellipsis(&format!("@{}", record.username()), handle_width);

        let lines = vec![
            Line::from(Span::styled(
                truncate_with_ellipsis(&record.name.display(), width),
                name_style,
            )),
            Line::from(vec![
                Span::styled(handle, styles::text_secondary()),
                Span::raw("  "),
                Span::styled(badge, styles::gender_badge(record.gender)),
            ]),
            Line::from(Span::styled(
                truncate_with_ellipsis(&record.email, width),
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(&record.phone, width),
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(
                    &format!("{}, {}", record.location.city, record.location.country),
                    width,
                ),
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{record, TestTerminal};
    use crate::theme::palette;
    use userdir_core::Gender;

    #[test]
    fn test_card_shows_summary_fields() {
        let user = record(3, "Ann", "Lee", Gender::Female);
        let mut term = TestTerminal::with_size(40, CARD_HEIGHT);
        term.render_widget(UserCard::new(&user), term.area());

        assert!(term.line(1).starts_with("│Ms Ann Lee "));
        assert!(term.buffer_contains("@user3  Female"));
        assert!(term.buffer_contains("ann.lee@example.com"));
        assert!(term.buffer_contains("(555) 010-0003"));
        assert!(term.buffer_contains("Springfield, United States"));
    }

    #[test]
    fn test_selected_card_has_active_border() {
        let user = record(0, "Bob", "Stone", Gender::Male);
        let mut term = TestTerminal::with_size(40, CARD_HEIGHT);
        term.render_widget(UserCard::new(&user).selected(true), term.area());

        assert_eq!(term.buffer()[(0, 0)].fg, palette::BORDER_ACTIVE);
    }

    #[test]
    fn test_narrow_card_truncates_long_fields() {
        let user = record(0, "Maximilian", "Oberhausen", Gender::Male);
        let mut term = TestTerminal::with_size(20, CARD_HEIGHT);
        term.render_widget(UserCard::new(&user), term.area());

        assert!(term.buffer_contains("Mr Maximilian O..."));
        assert!(term.buffer_contains("maximilian.ober..."));
    }
}

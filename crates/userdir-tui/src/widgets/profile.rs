//! Detail screen for one user, plus the not-found fallback

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use userdir_core::UserRecord;

use crate::theme::styles;

const LABEL_WIDTH: usize = 15;

/// Long date form, e.g. "July 20, 1993"
pub fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn back_link() -> Line<'static> {
    Line::from(vec![
        Span::styled("← Back to Directory", styles::accent()),
        Span::raw("  "),
        Span::styled("[Esc]", styles::keybinding()),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, styles::accent_bold()))
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<LABEL_WIDTH$}"), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn plain(value: String) -> Line<'static> {
    Line::from(Span::styled(format!("  {value}"), styles::text_primary()))
}

fn national_id(record: &UserRecord) -> String {
    match (&record.id.name, &record.id.value) {
        (name, Some(value)) if !name.is_empty() => format!("{name} {value}"),
        (_, Some(value)) => value.clone(),
        _ => "Not available".to_string(),
    }
}

pub struct ProfileView<'a> {
    record: &'a UserRecord,
    scroll: u16,
}

impl<'a> ProfileView<'a> {
    pub fn new(record: &'a UserRecord) -> Self {
        Self { record, scroll: 0 }
    }

    /// Skip the first `scroll` lines of the panel content
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Largest useful scroll offset when rendered into `area`
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let visible = styles::glass_block(false).inner(area).height as usize;
        self.lines().len().saturating_sub(visible) as u16
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let r = self.record;
        let loc = &r.location;

        vec![
            back_link(),
            Line::default(),
            Line::from(Span::styled(r.name.display(), styles::text_bright_bold())),
            Line::from(Span::styled(format!("@{}", r.username()), styles::text_secondary())),
            Line::from(vec![
                Span::styled(r.gender.label(), styles::gender_badge(r.gender)),
                Span::styled(format!(" - Age {}", r.dob.age), styles::text_secondary()),
                Span::styled(format!("  ({})", r.nat), styles::text_muted()),
            ]),
            Line::default(),
            section("Contact"),
            field("Email", r.email.clone()),
            field("Phone", r.phone.clone()),
            field("Cell", r.cell.clone()),
            Line::default(),
            section("Location"),
            plain(format!("{} {}", loc.street.number, loc.street.name)),
            plain(format!("{}, {}", loc.city, loc.state)),
            plain(format!("{}, {}", loc.postcode, loc.country)),
            field(
                "Timezone",
                format!("{} (UTC{})", loc.timezone.description, loc.timezone.offset),
            ),
            Line::default(),
            section("Important Dates"),
            field("Date of Birth", format_long_date(&r.dob.date)),
            field(
                "Registered",
                format!(
                    "{} ({} years ago)",
                    format_long_date(&r.registered.date),
                    r.registered.age
                ),
            ),
            Line::default(),
            section("Account"),
            field("UUID", r.uuid().to_string()),
            field("Username", r.username().to_string()),
            field("National ID", national_id(r)),
            Line::default(),
            section("Coordinates"),
            field("Latitude", loc.coordinates.latitude.clone()),
            field("Longitude", loc.coordinates.longitude.clone()),
        ]
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(false).title(" Profile ");
        if self.max_scroll(area) > 0 {
            block = block.title_bottom(
                Line::styled(" ↑↓ scroll ", styles::text_muted()).right_aligned(),
            );
        }
        Paragraph::new(self.lines())
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// Shown when the detail route has no record handle
pub struct NotFound<'a> {
    uuid: &'a str,
}

impl<'a> NotFound<'a> {
    pub fn new(uuid: &'a str) -> Self {
        Self { uuid }
    }
}

impl Widget for NotFound<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled("User not found", styles::error_text())),
            Line::from(Span::styled(
                format!("No profile is loaded for {}", self.uuid),
                styles::text_muted(),
            )),
            Line::default(),
            back_link(),
        ];
        let height = (lines.len() as u16).min(inner.height);
        let centered = Rect {
            y: inner.y + (inner.height - height) / 2,
            height,
            ..inner
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{record, TestTerminal};
    use chrono::TimeZone;
    use userdir_core::Gender;

    #[test]
    fn test_format_long_date() {
        let date = Utc.with_ymd_and_hms(1993, 7, 20, 9, 44, 18).unwrap();
        assert_eq!(format_long_date(&date), "July 20, 1993");

        let date = Utc.with_ymd_and_hms(2015, 5, 7, 0, 0, 0).unwrap();
        assert_eq!(format_long_date(&date), "May 7, 2015");
    }

    #[test]
    fn test_profile_shows_all_sections() {
        let user = record(7, "Ann", "Lee", Gender::Female);
        let mut term = TestTerminal::new();
        term.render_widget(ProfileView::new(&user), term.area());

        for text in [
            "Back to Directory",
            "Ms Ann Lee",
            "@user7",
            "Female - Age 36",
            "Contact",
            "ann.lee@example.com",
            "(555) 020-0007",
            "107 Main Street",
            "Springfield, Oregon",
            "97477, United States",
            "Pacific Time (US & Canada) (UTC-8:00)",
            "Important Dates",
            "January 1, 1990",
            "(10 years ago)",
            "uuid-7",
            "SSN 000-00-0007",
            "44.0462",
            "-123.0220",
        ] {
            assert!(term.buffer_contains(text), "missing {text:?}");
        }
    }

    #[test]
    fn test_field_labels_are_aligned() {
        let user = record(1, "Bob", "Stone", Gender::Male);
        let mut term = TestTerminal::new();
        term.render_widget(ProfileView::new(&user), term.area());

        let email_row = term.find_line("Email").unwrap();
        let phone_row = term.find_line("Phone").unwrap();
        let email_col = term.line(email_row).find("bob.stone").unwrap();
        let phone_col = term.line(phone_row).find("(555)").unwrap();
        assert_eq!(email_col, phone_col);
    }

    #[test]
    fn test_max_scroll_tracks_visible_rows() {
        let user = record(3, "Cal", "Ray", Gender::Male);
        let view = ProfileView::new(&user);
        let total = view.lines().len() as u16;

        // Two border rows
        assert_eq!(view.max_scroll(Rect::new(0, 0, 80, 21)), total - 19);
        assert_eq!(view.max_scroll(Rect::new(0, 0, 80, total + 2)), 0);
        assert_eq!(view.max_scroll(Rect::new(0, 0, 80, 60)), 0);
    }

    #[test]
    fn test_scrolled_view_starts_further_down() {
        let user = record(3, "Cal", "Ray", Gender::Male);
        let mut term = TestTerminal::with_size(80, 12);
        term.render_widget(ProfileView::new(&user).scroll(6), term.area());

        assert!(!term.buffer_contains("Back to Directory"));
        assert!(term.buffer_contains("Contact"));
        assert!(term.buffer_contains("scroll"));
    }

    #[test]
    fn test_not_found() {
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(NotFound::new("missing-uuid"), term.area());

        assert!(term.buffer_contains("User not found"));
        assert!(term.buffer_contains("missing-uuid"));
        assert!(term.buffer_contains("Back to Directory"));
    }
}

//! Card grid for the current page
//!
//! Lays the page out in rows of `columns` cards and scrolls so the row
//! holding the cursor stays visible.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use userdir_core::UserRecord;

use super::user_card::{UserCard, CARD_HEIGHT};

const MIN_CARD_WIDTH: u16 = 30;
const MAX_COLUMNS: usize = 3;

/// Number of card columns that fit in `width`
pub fn columns_for_width(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

pub struct UserGrid<'a> {
    items: &'a [Arc<UserRecord>],
    cursor: usize,
    columns: usize,
}

impl<'a> UserGrid<'a> {
    pub fn new(items: &'a [Arc<UserRecord>]) -> Self {
        Self {
            items,
            cursor: 0,
            columns: 1,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// First row to draw so the cursor row is within `visible_rows`
    fn first_row(&self, visible_rows: usize) -> usize {
        let cursor_row = self.cursor / self.columns;
        if cursor_row >= visible_rows {
            cursor_row + 1 - visible_rows
        } else {
            0
        }
    }
}

impl Widget for UserGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.items.is_empty() || area.height == 0 {
            return;
        }

        let total_rows = self.items.len().div_ceil(self.columns);
        let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
        let first_row = self.first_row(visible_rows);

        let constraints = (0..self.columns).map(|_| Constraint::Ratio(1, self.columns as u32));
        let column_areas = Layout::horizontal(constraints).split(area);

        for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
            let y = area.y + slot as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }

            for (col, column) in column_areas.iter().enumerate() {
                let index = row * self.columns + col;
                let Some(record) = self.items.get(index) else {
                    break;
                };
                let card_area = Rect {
                    x: column.x,
                    y,
                    width: column.width,
                    height,
                };
                UserCard::new(record)
                    .selected(index == self.cursor)
                    .render(card_area, buf);
            }
        }
    }
}

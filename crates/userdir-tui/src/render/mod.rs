//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use userdir_app::state::{AppState, Route, UiMode};
use userdir_app::ListingFocus;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Rendering only reads state, except for `listing.grid_columns`: the card
/// grid records how many columns fit so vertical cursor moves step by a row.
/// The detail screen also clamps `profile_scroll` to its content.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let path = state.route.path();
    let mode = state.ui_mode();
    frame.render_widget(widgets::MainHeader::new(&path, mode), areas.header);

    match mode {
        UiMode::Profile => render_profile(frame, areas.body, state),
        UiMode::Listing | UiMode::SearchInput => render_listing(frame, areas.body, state),
    }
}

fn render_listing(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let listing = &state.listing;
    let page = listing.current_page();
    let show_pagination = !listing.is_loading() && page.total_pages > 1;
    let areas = layout::listing(area, listing.error().is_some(), show_pagination);

    frame.render_widget(
        widgets::SearchInput::new(listing.search_input())
            .focused(listing.focus == ListingFocus::Search),
        areas.search,
    );
    frame.render_widget(widgets::GenderFilter::new(listing.gender()), areas.filter);

    if let Some(summary) = listing.result_summary() {
        frame.render_widget(widgets::ResultSummary::new(&summary), areas.summary);
    }

    if let (Some(message), Some(error_area)) = (listing.error(), areas.error) {
        frame.render_widget(widgets::ErrorBanner::new(message), error_area);
    }

    let columns = widgets::columns_for_width(areas.content.width);
    if listing.is_loading() {
        frame.render_widget(
            widgets::LoadingIndicator::new(state.spinner_frame),
            areas.content,
        );
    } else if page.is_empty() {
        frame.render_widget(widgets::EmptyState, areas.content);
    } else {
        frame.render_widget(
            widgets::UserGrid::new(page.items)
                .columns(columns)
                .cursor(listing.cursor()),
            areas.content,
        );
    }

    if let Some(pagination_area) = areas.pagination {
        frame.render_widget(
            widgets::PaginationBar::new(page.page, page.total_pages),
            pagination_area,
        );
    }

    state.listing.grid_columns = columns;
}

fn render_profile(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let scroll = match state.profile_record() {
        Ok(Some(record)) => {
            let view = widgets::ProfileView::new(record);
            let scroll = state.profile_scroll.min(view.max_scroll(area));
            frame.render_widget(view.scroll(scroll), area);
            scroll
        }
        Ok(None) => 0,
        Err(_) => {
            let uuid = match &state.route {
                Route::Profile { uuid, .. } => uuid.as_str(),
                Route::Listing => "",
            };
            frame.render_widget(widgets::NotFound::new(uuid), area);
            0
        }
    };
    state.profile_scroll = scroll;
}

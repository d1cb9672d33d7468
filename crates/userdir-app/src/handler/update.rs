//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::session::ListingFocus;
use crate::state::{AppState, Route};
use userdir_core::prelude::*;
use userdir_core::{has_next, has_previous};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.listing.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Started => match state.route {
            Route::Listing => enter_listing(state),
            Route::Profile { .. } => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Record Source Messages
        // ─────────────────────────────────────────────────────────
        Message::UsersLoaded {
            request_id,
            records,
        } => {
            let count = records.len();
            if state.listing.apply_batch(request_id, records) {
                info!("Loaded {} users (request {})", count, request_id);
            } else {
                debug!("Discarding stale response for request {}", request_id);
            }
            UpdateResult::none()
        }

        Message::UsersLoadFailed { request_id, error } => {
            if state.listing.apply_failure(request_id, error.clone()) {
                warn!("Request {} failed: {}", request_id, error);
            } else {
                debug!("Discarding stale failure for request {}", request_id);
            }
            UpdateResult::none()
        }

        Message::RetryFetch => {
            if state.route == Route::Listing && !state.listing.is_loading() {
                start_fetch(state)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Listing Messages
        // ─────────────────────────────────────────────────────────
        Message::SetGender(gender) => {
            if state.listing.set_gender(gender) {
                debug!("Gender filter changed to {:?}", gender);
                start_fetch(state)
            } else {
                UpdateResult::none()
            }
        }

        Message::SearchInputChanged(text) => schedule_search(state, text),

        Message::ClearSearch => schedule_search(state, String::new()),

        Message::SearchCommitted { generation, text } => {
            if !state.listing.commit_search(generation, text) {
                trace!("Ignoring superseded search commit {}", generation);
            }
            UpdateResult::none()
        }

        Message::FocusSearch => {
            state.listing.focus = ListingFocus::Search;
            UpdateResult::none()
        }

        Message::BlurSearch => {
            state.listing.focus = ListingFocus::Cards;
            UpdateResult::none()
        }

        Message::GoToPage(page) => {
            state.listing.go_to_page(page);
            UpdateResult::none()
        }

        Message::NextPage => {
            let (page, total) = (state.listing.page(), state.listing.total_pages());
            if has_next(page, total) {
                state.listing.go_to_page(page + 1);
            }
            UpdateResult::none()
        }

        Message::PreviousPage => {
            let page = state.listing.page();
            if has_previous(page) {
                state.listing.go_to_page(page - 1);
            }
            UpdateResult::none()
        }

        Message::FirstPage => {
            state.listing.go_to_page(1);
            UpdateResult::none()
        }

        Message::LastPage => {
            let total = state.listing.total_pages();
            state.listing.go_to_page(total);
            UpdateResult::none()
        }

        Message::MoveCursor(delta) => {
            state.listing.move_cursor(delta);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSelected => match state.listing.selected() {
            Some(record) => UpdateResult::message(Message::OpenProfile(record)),
            None => UpdateResult::none(),
        },

        Message::OpenProfile(record) => {
            state.listing.focus = ListingFocus::Cards;
            state.open_profile(record);
            UpdateResult::none()
        }

        Message::Back => {
            if state.route == Route::Listing {
                return UpdateResult::none();
            }
            enter_listing(state)
        }

        Message::ScrollProfile(delta) => {
            if matches!(state.route, Route::Profile { .. }) {
                state.scroll_profile(delta);
            }
            UpdateResult::none()
        }
    }
}

/// Show the listing, issuing the first fetch if the session has none yet
fn enter_listing(state: &mut AppState) -> UpdateResult {
    state.route = Route::Listing;
    if state.listing.needs_fetch() {
        start_fetch(state)
    } else {
        UpdateResult::none()
    }
}

/// Issue a fetch for the current filter. Earlier in-flight fetches become stale.
fn start_fetch(state: &mut AppState) -> UpdateResult {
    match state.fetch_request() {
        Ok(request) => {
            let request_id = state.listing.begin_fetch();
            debug!("Starting fetch {} ({:?})", request_id, request);
            UpdateResult::action(UpdateAction::FetchUsers {
                request_id,
                request,
            })
        }
        Err(e) => {
            error!("Cannot build fetch request: {}", e);
            let request_id = state.listing.begin_fetch();
            state.listing.apply_failure(request_id, e.to_string());
            UpdateResult::none()
        }
    }
}

fn schedule_search(state: &mut AppState, text: String) -> UpdateResult {
    let generation = state.listing.edit_search(text.clone());
    UpdateResult::action(UpdateAction::ScheduleSearchCommit { generation, text })
}

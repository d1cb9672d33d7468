//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use userdir_core::Gender;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from any mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Listing => handle_key_listing(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Profile => handle_key_profile(key),
    }
}

/// Handle key events on the listing with the card grid focused
fn handle_key_listing(state: &AppState, key: InputKey) -> Option<Message> {
    let columns = state.listing.grid_columns.max(1) as isize;

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Search
        InputKey::Char('/') => Some(Message::FocusSearch),
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),

        // Gender filter
        InputKey::Char('a') => Some(Message::SetGender(None)),
        InputKey::Char('m') => Some(Message::SetGender(Some(Gender::Male))),
        InputKey::Char('f') => Some(Message::SetGender(Some(Gender::Female))),

        // Card cursor
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveCursor(-1)),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveCursor(1)),
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveCursor(-columns)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveCursor(columns)),
        InputKey::Enter => Some(Message::OpenSelected),

        // Pagination
        InputKey::Char('n') | InputKey::PageDown => Some(Message::NextPage),
        InputKey::Char('p') | InputKey::PageUp => Some(Message::PreviousPage),
        InputKey::Home => Some(Message::FirstPage),
        InputKey::End => Some(Message::LastPage),
        InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Message::GoToPage(d as usize)),

        InputKey::Char('r') => Some(Message::RetryFetch),

        _ => None,
    }
}

/// Handle key events while typing in the search field
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave the field; the text and its pending commit are kept
        InputKey::Esc | InputKey::Enter | InputKey::Tab | InputKey::Down => {
            Some(Message::BlurSearch)
        }

        InputKey::CharCtrl('u') => Some(Message::ClearSearch),

        InputKey::Backspace => {
            let mut text = state.listing.search_input().to_string();
            text.pop()?;
            Some(Message::SearchInputChanged(text))
        }

        InputKey::Char(c) => {
            let mut text = state.listing.search_input().to_string();
            text.push(c);
            Some(Message::SearchInputChanged(text))
        }

        _ => None,
    }
}

/// Lines moved by PageUp/PageDown on the detail screen
const PROFILE_PAGE_LINES: isize = 10;

/// Handle key events on the detail screen
fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('b') => {
            Some(Message::Back)
        }
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollProfile(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollProfile(1)),
        InputKey::PageUp => Some(Message::ScrollProfile(-PROFILE_PAGE_LINES)),
        InputKey::PageDown => Some(Message::ScrollProfile(PROFILE_PAGE_LINES)),
        InputKey::Home => Some(Message::ScrollProfile(isize::MIN)),

        _ => None,
    }
}

//! Message types for the application (TEA pattern)

use std::sync::Arc;

use crate::input_key::InputKey;
use userdir_core::{Gender, UserRecord};

/// Token attached to each fetch so stale completions can be recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Runner started; enter the initial route
    Started,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Record Source Messages
    // ─────────────────────────────────────────────────────────
    /// A fetch completed successfully
    UsersLoaded {
        request_id: RequestId,
        records: Vec<UserRecord>,
    },

    /// A fetch failed
    UsersLoadFailed { request_id: RequestId, error: String },

    /// Re-issue the fetch for the current gender filter
    RetryFetch,

    // ─────────────────────────────────────────────────────────
    // Listing Messages
    // ─────────────────────────────────────────────────────────
    /// Select the gender filter (`None` = all users)
    SetGender(Option<Gender>),

    /// Search field content changed (already applied text, not a delta)
    SearchInputChanged(String),

    /// Clear the search field immediately
    ClearSearch,

    /// Debounce timer fired for the given keystroke generation
    SearchCommitted { generation: u64, text: String },

    /// Move focus into the search field
    FocusSearch,

    /// Move focus back to the card grid
    BlurSearch,

    /// Jump to a 1-based page (clamped by the handler)
    GoToPage(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,

    /// Move the card cursor by a signed offset within the current page
    MoveCursor(isize),

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Open the detail screen for the card under the cursor
    OpenSelected,

    /// Open the detail screen for a record handle
    OpenProfile(Arc<UserRecord>),

    /// Return to the listing screen
    Back,

    /// Scroll the detail screen by a signed number of lines
    ScrollProfile(isize),
}

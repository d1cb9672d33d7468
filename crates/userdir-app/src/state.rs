//! Application state (Model in TEA pattern)

use std::sync::Arc;

use crate::config::Settings;
use crate::session::{ListingFocus, ListingSession};
use userdir_core::prelude::*;
use userdir_core::{Gender, UserRecord};
use userdir_source::FetchRequest;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Logical screen the user is on
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// `/`: the directory listing
    Listing,
    /// `/profile/{uuid}`: one user's details.
    ///
    /// `record` is the in-memory handle passed by the listing. It is `None`
    /// when the route was entered without one (e.g. from the command line).
    Profile {
        uuid: String,
        record: Option<Arc<UserRecord>>,
    },
}

impl Route {
    /// Logical path shown in the header
    pub fn path(&self) -> String {
        match self {
            Route::Listing => "/".to_string(),
            Route::Profile { uuid, .. } => format!("/profile/{uuid}"),
        }
    }
}

/// Current UI mode, selecting the key handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Listing with the card grid focused
    Listing,
    /// Listing with keystrokes going to the search field
    SearchInput,
    /// Detail screen
    Profile,
}

/// Options taken from the command line at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Initial server-side gender filter
    pub gender: Option<Gender>,
    /// Open this profile directly (no record handle is available)
    pub profile: Option<String>,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub route: Route,
    pub listing: ListingSession,
    pub settings: Settings,
    /// Frame counter for the loading spinner, advanced on each tick
    pub spinner_frame: usize,
    /// First visible line of the detail screen. The renderer clamps it to
    /// the content height.
    pub profile_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            route: Route::Listing,
            listing: ListingSession::new(),
            settings,
            spinner_frame: 0,
            profile_scroll: 0,
        }
    }

    /// Build the initial state from settings plus command-line options
    pub fn from_startup(settings: Settings, options: StartupOptions) -> Self {
        let mut state = Self::with_settings(settings);
        state.listing = ListingSession::with_gender(options.gender);
        if let Some(uuid) = options.profile {
            state.route = Route::Profile { uuid, record: None };
        }
        state
    }

    pub fn ui_mode(&self) -> UiMode {
        match (&self.route, self.listing.focus) {
            (Route::Profile { .. }, _) => UiMode::Profile,
            (Route::Listing, ListingFocus::Search) => UiMode::SearchInput,
            (Route::Listing, ListingFocus::Cards) => UiMode::Listing,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Navigate to the detail screen carrying the record handle
    pub fn open_profile(&mut self, record: Arc<UserRecord>) {
        debug!("Opening profile {}", record.uuid());
        self.route = Route::Profile {
            uuid: record.uuid().to_string(),
            record: Some(record),
        };
        self.profile_scroll = 0;
    }

    /// Move the detail scroll offset, saturating at the top
    pub fn scroll_profile(&mut self, delta: isize) {
        let next = (self.profile_scroll as isize).saturating_add(delta);
        self.profile_scroll = next.clamp(0, u16::MAX as isize) as u16;
    }

    /// Record shown on the detail screen.
    ///
    /// Returns [`Error::RecordNotFound`] on a profile route without a handle,
    /// and `Ok(None)` on the listing route.
    pub fn profile_record(&self) -> Result<Option<&Arc<UserRecord>>> {
        match &self.route {
            Route::Listing => Ok(None),
            Route::Profile {
                record: Some(record),
                ..
            } => Ok(Some(record)),
            Route::Profile { uuid, record: None } => Err(Error::record_not_found(uuid.clone())),
        }
    }

    /// Fetch request for the listing's current gender filter
    pub fn fetch_request(&self) -> Result<FetchRequest> {
        self.settings.source.fetch_request(self.listing.gender())
    }
}

//! userdir-app - Application state and orchestration for the user directory
//!
//! Implements the TEA (The Elm Architecture) pattern: a [`Message`] enum, an
//! [`AppState`] model, and a single `update` function that is the only
//! mutator. Background work (fetches, the search debounce timer, signal
//! handling) reports back through the [`Engine`]'s message channel.

pub mod actions;
pub mod config;
pub mod debounce;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod session;
pub mod signals;
pub mod state;

// Re-export primary types
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, RequestId};
pub use session::{ListingFocus, ListingSession};
pub use state::{AppPhase, AppState, Route, StartupOptions, UiMode};

//! userdir-tui - Terminal UI for the user directory
//!
//! Creates an [`Engine`](userdir_app::Engine) from userdir-app and adds
//! terminal rendering, event polling, and the widgets for the listing and
//! profile screens.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

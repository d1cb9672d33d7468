//! Configuration file parsing for the user directory
//!
//! Settings live in `<config dir>/userdir/config.toml`; command-line flags
//! are layered on top with [`Settings::apply_overrides`].

pub mod settings;
pub mod types;

pub use settings::{config_file_path, default_config_dir, init_config_dir, load_settings};
pub use types::*;

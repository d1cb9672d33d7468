//! # userdir-core - Core Domain Types
//!
//! Foundation crate for the user directory. Provides domain types, error
//! handling, logging setup, and the pure listing pipeline.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`UserRecord`] - One user profile as delivered by the record source
//! - [`Gender`] - The two server-side filter values
//!
//! ### Listing Pipeline (`listing`)
//! - [`filter()`] - Case-insensitive search over name, email and username
//! - [`paginate()`] - Fixed-size, 1-based, clamped page window
//! - [`PAGE_SIZE`] - Records per page (12)
//!
//! ### Pagination Control (`pagination`)
//! - [`page_labels()`] - Windowed page labels with ellipses
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use userdir_core::prelude::*;
//! ```

pub mod error;
pub mod listing;
pub mod logging;
pub mod pagination;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use listing::{clamp_page, filter, matches, paginate, total_pages, Page, PAGE_SIZE};
pub use pagination::{has_next, has_previous, page_labels, PageLabel};
pub use types::{
    Coordinates, DatedAge, Gender, Location, Login, NationalId, Picture, Street, Timezone,
    UserName, UserRecord,
};

//! # userdir-source - User Record Source
//!
//! Fetches batches of randomly generated user profiles from the
//! randomuser.me API (or any server speaking the same envelope).
//!
//! Depends on [`userdir_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`RecordSource`] - Async trait for anything that yields record batches
//! - [`HttpRecordSource`] - reqwest-backed production implementation
//! - [`FetchRequest`] - Batch size, optional gender and seed for one fetch
//! - [`parse_response()`] - Decode the `{ results, info }` envelope
//!
//! With the `test-helpers` feature, [`test_utils`] exposes record fixtures
//! and a scripted in-memory source.

pub mod client;
pub mod envelope;
pub mod request;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{
    HttpRecordSource, LocalRecordSource, RecordSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use envelope::{parse_response, ApiInfo, ApiResponse};
pub use request::{FetchRequest, DEFAULT_RESULTS};

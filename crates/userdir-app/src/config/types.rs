//! Configuration types for the user directory
//!
//! Defines:
//! - `Settings` - Top-level settings loaded from `config.toml`
//! - `SourceSettings` - Record source endpoint, batch size, seed, timeout
//! - `SettingsOverrides` - Values supplied on the command line

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;
use userdir_core::prelude::*;
use userdir_core::Gender;
use userdir_source::{FetchRequest, DEFAULT_BASE_URL, DEFAULT_RESULTS};

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,
}

/// Record source settings (`[source]` table)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Endpoint queried for batches
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records requested per fetch
    #[serde(default = "default_results")]
    pub results: u32,

    /// Optional seed for reproducible batches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            results: default_results(),
            seed: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_results() -> u32 {
    DEFAULT_RESULTS
}

fn default_timeout_secs() -> u64 {
    10
}

impl SourceSettings {
    /// Parsed endpoint URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid base_url '{}': {}", self.base_url, e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the fetch request for the given server-side gender filter
    pub fn fetch_request(&self, gender: Option<Gender>) -> Result<FetchRequest> {
        Ok(FetchRequest::new(self.results)?
            .with_gender(gender)
            .with_seed(self.seed.clone()))
    }
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub seed: Option<String>,
    pub results: Option<u32>,
}

impl Settings {
    /// Apply command-line overrides on top of file values
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(seed) = &overrides.seed {
            self.source.seed = Some(seed.clone());
        }
        if let Some(results) = overrides.results {
            self.source.results = results;
        }
    }

    /// Replace out-of-range values with defaults, logging each correction
    pub fn sanitize(&mut self) {
        if self.source.results == 0 {
            warn!(
                "source.results must be positive, using default {}",
                DEFAULT_RESULTS
            );
            self.source.results = DEFAULT_RESULTS;
        }
        if self.source.timeout_secs == 0 {
            warn!(
                "source.timeout_secs must be positive, using default {}",
                default_timeout_secs()
            );
            self.source.timeout_secs = default_timeout_secs();
        }
        if self.source.base_url().is_err() {
            warn!(
                "source.base_url '{}' is not a valid URL, using default",
                self.source.base_url
            );
            self.source.base_url = default_base_url();
        }
        if self.source.seed.as_deref() == Some("") {
            self.source.seed = None;
        }
    }
}

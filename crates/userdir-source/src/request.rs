//! Fetch request parameters and URL construction

use url::Url;
use userdir_core::prelude::*;
use userdir_core::Gender;

/// Default number of records requested per fetch
pub const DEFAULT_RESULTS: u32 = 100;

/// Parameters of a single fetch against the record source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    results: u32,
    gender: Option<Gender>,
    seed: Option<String>,
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            results: DEFAULT_RESULTS,
            gender: None,
            seed: None,
        }
    }
}

impl FetchRequest {
    /// Create a request for `results` records.
    ///
    /// Returns [`Error::InvalidRequest`] when `results` is zero.
    pub fn new(results: u32) -> Result<Self> {
        if results == 0 {
            return Err(Error::invalid_request("results must be a positive integer"));
        }
        Ok(Self {
            results,
            ..Self::default()
        })
    }

    /// Restrict the batch to one gender (server-side filter)
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Attach an opaque seed so the same batch can be fetched twice
    pub fn with_seed(mut self, seed: Option<String>) -> Self {
        self.seed = seed.filter(|s| !s.is_empty());
        self
    }

    pub fn results(&self) -> u32 {
        self.results
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Build the request URL: `results`, then `gender`, then `seed`.
    ///
    /// Any query already present on `base` is replaced.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("results", &self.results.to_string());
            if let Some(gender) = self.gender {
                pairs.append_pair("gender", gender.as_param());
            }
            if let Some(seed) = &self.seed {
                pairs.append_pair("seed", seed);
            }
        }
        url
    }
}

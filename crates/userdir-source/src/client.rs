//! Record source trait and the reqwest-backed HTTP implementation

use std::time::Duration;

use url::Url;
use userdir_core::prelude::*;
use userdir_core::UserRecord;

use crate::envelope::parse_response;
use crate::request::FetchRequest;

/// Public endpoint serving randomly generated user profiles
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of user record batches.
///
/// One call performs one request. There is no retry: failures are surfaced
/// to the caller as [`Error::FetchFailure`].
#[trait_variant::make(RecordSource: Send)]
pub trait LocalRecordSource {
    /// Fetch one batch of records in upstream order
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<UserRecord>>;
}

/// Production record source talking to the randomuser.me API
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRecordSource {
    /// Create a source for `base_url` with the given request timeout
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("userdir/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::fetch_failure(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Create a source for the public endpoint with default settings
    pub fn with_defaults() -> Result<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| Error::config(format!("invalid base URL: {e}")))?;
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl RecordSource for HttpRecordSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<UserRecord>> {
        let url = request.to_url(&self.base_url);
        debug!("Fetching users: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch_failure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Record source returned HTTP {}", status);
            return Err(Error::fetch_failure(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::fetch_failure(format!("failed to read response body: {e}")))?;

        let envelope = parse_response(&body)?;
        debug!(
            "Received {} records (seed={}, page={}, version={})",
            envelope.results.len(),
            envelope.info.seed,
            envelope.info.page,
            envelope.info.version
        );

        Ok(envelope.results)
    }
}

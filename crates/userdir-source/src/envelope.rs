//! Response envelope parsing
//!
//! The upstream API answers with `{ "results": [...], "info": {...} }`.
//! `info` is accepted and logged but not interpreted further.

use serde::Deserialize;
use userdir_core::prelude::*;
use userdir_core::UserRecord;

/// Metadata returned alongside each batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub results: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub version: String,
}

/// The full response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub results: Vec<UserRecord>,
    #[serde(default)]
    pub info: ApiInfo,
}

/// Parse a response body into the envelope.
///
/// Any shape mismatch is reported as [`Error::FetchFailure`].
pub fn parse_response(body: &[u8]) -> Result<ApiResponse> {
    serde_json::from_slice(body)
        .map_err(|e| Error::fetch_failure(format!("malformed response body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_results() {
        let body = br#"{"results": [], "info": {"seed": "s", "results": 0, "page": 1, "version": "1.4"}}"#;
        let response = parse_response(body).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.info.seed, "s");
        assert_eq!(response.info.version, "1.4");
    }

    #[test]
    fn test_missing_info_is_tolerated() {
        let response = parse_response(br#"{"results": []}"#).unwrap();
        assert_eq!(response.info, ApiInfo::default());
    }

    #[test]
    fn test_upstream_error_body_is_fetch_failure() {
        let err = parse_response(br#"{"error": "Uh oh, something has gone wrong."}"#).unwrap_err();
        assert!(matches!(err, Error::FetchFailure { .. }));
    }

    #[test]
    fn test_non_json_is_fetch_failure() {
        let err = parse_response(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::FetchFailure { .. }));
        assert!(err.to_string().contains("malformed response body"));
    }
}

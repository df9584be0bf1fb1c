//! Response decoding
//!
//! Successful responses carry the result as a binary body; failures carry a
//! JSON error envelope. Older extract servers instead answer 200 with a JSON
//! envelope holding the ZIP as a hex string, which [`decode_legacy_envelope`]
//! converts back to bytes.

use serde::Deserialize;

use crate::error::{ApiFailure, ClientError};
use crate::operation::PayloadKind;

/// Outcome of one submission, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult {
    Success { bytes: Vec<u8>, kind: PayloadKind },
    Failure(ApiFailure),
}

impl From<ClientError> for ApiResult {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api(failure) => ApiResult::Failure(failure),
            other => ApiResult::Failure(ApiFailure {
                error: other.to_string(),
                details: None,
                hint: None,
            }),
        }
    }
}

/// Legacy extract response: `{success, zip_data?, documents_found?, error?, details?}`
#[derive(Debug, Deserialize)]
struct LegacyEnvelope {
    success: bool,
    #[serde(default)]
    zip_data: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    documents_found: Option<u32>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Decode a legacy JSON envelope from the extract endpoint into ZIP bytes.
///
/// # Errors
/// - `ClientError::Api` when the envelope reports `success: false`
/// - `ClientError::Transport` when the body is not the envelope, `zip_data`
///   is missing, or the hex string does not decode
pub fn decode_legacy_envelope(body: &str) -> Result<Vec<u8>, ClientError> {
    let envelope: LegacyEnvelope = serde_json::from_str(body)
        .map_err(|e| ClientError::Transport(format!("Unexpected response body: {}", e)))?;

    if !envelope.success {
        return Err(ClientError::Api(ApiFailure {
            error: envelope
                .error
                .unwrap_or_else(|| "Extraction failed".to_string()),
            details: envelope.details,
            hint: None,
        }));
    }

    let zip_data = envelope.zip_data.ok_or_else(|| {
        ClientError::Transport("Response is missing zip_data".to_string())
    })?;

    hex::decode(&zip_data)
        .map_err(|e| ClientError::Transport(format!("Invalid zip_data encoding: {}", e)))
}

/// Whether a Content-Type header value denotes a JSON body
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim() == "application/json")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_hex_zip_data() {
        let body = r#"{"success": true, "documents_found": 2, "zip_data": "504b0304"}"#;
        let bytes = decode_legacy_envelope(body).expect("valid envelope");
        assert_eq!(bytes, vec![0x50, 0x4B, 0x03, 0x04]);
    }

    #[test]
    fn test_decode_failure_envelope() {
        let body = r#"{"success": false, "error": "Failed to extract documents", "details": "Not a valid merged PDF"}"#;
        let result = decode_legacy_envelope(body);
        match result {
            Err(ClientError::Api(failure)) => {
                assert_eq!(failure.error, "Failed to extract documents");
                assert_eq!(failure.details.as_deref(), Some("Not a valid merged PDF"));
            }
            other => panic!("expected api failure, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_zip_data() {
        let body = r#"{"success": true}"#;
        assert!(matches!(
            decode_legacy_envelope(body),
            Err(ClientError::Transport(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        let body = r#"{"success": true, "zip_data": "zzzz"}"#;
        assert!(matches!(
            decode_legacy_envelope(body),
            Err(ClientError::Transport(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_envelope_body() {
        assert!(matches!(
            decode_legacy_envelope("<html></html>"),
            Err(ClientError::Transport(_))
        ));
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(!is_json_content_type(Some("application/pdf")));
        assert!(!is_json_content_type(Some("application/zip")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_client_error_converts_to_failure() {
        let result: ApiResult = ClientError::Validation("Please select at least one PDF".into()).into();
        match result {
            ApiResult::Failure(failure) => {
                assert_eq!(failure.error, "Please select at least one PDF");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_keeps_details_through_conversion() {
        let err = ClientError::Api(ApiFailure {
            error: "no embedded documents".into(),
            details: Some("empty name tree".into()),
            hint: Some("Use a container PDF".into()),
        });
        match ApiResult::from(err) {
            ApiResult::Failure(failure) => {
                assert_eq!(failure.details.as_deref(), Some("empty name tree"));
                assert_eq!(failure.hint.as_deref(), Some("Use a container PDF"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}

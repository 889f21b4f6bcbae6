//! HTTP adapter implementing `RawApiPort`
//!
//! The client is selected at compile time: reqwest on native targets,
//! gloo-net on wasm. Response handling shared by both lives here.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

use serde_json::Value;

use crate::ports::outbound::ApiError;

/// Join a base URL (no trailing slash) and an absolute path
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Decode a response body; an empty body is JSON `null`
pub(crate) fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Build the error for a non-success response.
///
/// Prefers a `message`/`error` field from a JSON body, then the raw body,
/// then the status reason phrase.
pub(crate) fn http_error(status: u16, reason: Option<&str>, body: &str) -> ApiError {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["message", "error"]
            .iter()
            .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
    });
    let trimmed = body.trim();
    let message = from_json
        .or_else(|| (!trimmed.is_empty()).then(|| trimmed.to_string()))
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| "request failed".to_string());
    ApiError::HttpError { status, message }
}

/// Check an acknowledgement response; a 2xx body is not inspected
pub(crate) fn ack(
    status: u16,
    success: bool,
    reason: Option<&str>,
    body: &str,
) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(http_error(status, reason, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_paths_with_single_slash() {
        assert_eq!(
            join_url("http://localhost:4001", "/movie/3"),
            "http://localhost:4001/movie/3"
        );
        assert_eq!(
            join_url("http://localhost:4001/", "movie"),
            "http://localhost:4001/movie"
        );
    }

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("  \n").unwrap(), Value::Null);
        assert_eq!(decode_body(r#"{"id":1}"#).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(decode_body("<html>"), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn error_message_prefers_json_field() {
        let err = http_error(400, Some("Bad Request"), r#"{"message":"score out of range"}"#);
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 400,
                message: "score out of range".into()
            }
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            http_error(500, Some("Internal Server Error"), "boom"),
            ApiError::HttpError {
                status: 500,
                message: "boom".into()
            }
        );
        assert_eq!(
            http_error(404, Some("Not Found"), ""),
            ApiError::HttpError {
                status: 404,
                message: "Not Found".into()
            }
        );
    }

    #[test]
    fn plain_text_acknowledgement_is_success() {
        assert_eq!(ack(200, true, Some("OK"), "Movie deleted"), Ok(()));
        assert_eq!(ack(201, true, Some("Created"), "OK"), Ok(()));
    }

    #[test]
    fn failed_acknowledgement_keeps_server_message() {
        assert_eq!(
            ack(404, false, Some("Not Found"), r#"{"error":"no such movie"}"#),
            Err(ApiError::HttpError {
                status: 404,
                message: "no such movie".into()
            })
        );
    }
}

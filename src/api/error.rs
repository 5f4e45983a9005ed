//! API Errors
//!
//! Failure taxonomy for calls against the todo resource.

use thiserror::Error;

use crate::models::Todo;

/// Success status of every mutating call
pub const NO_CONTENT: u16 = 204;
/// Success status of the list call
pub const OK: u16 = 200;

/// Errors that can occur when talking to the todo server
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, DNS failure, aborted fetch
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with an unexpected status and a JSON body
    #[error("server answered {status}: {body}")]
    UnexpectedStatus {
        status: u16,
        body: serde_json::Value,
    },

    /// Server answered with an unexpected status and a body that is not JSON
    #[error("server answered {status} with a non-JSON body: {reason}")]
    MalformedBody {
        status: u16,
        reason: String,
    },

    /// List response was 200 but not an array of todos
    #[error("unexpected todo list payload: {0}")]
    Decode(serde_json::Error),
}

/// Turn a non-success response into an error, parsing its body as JSON
pub fn unexpected(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(body) => ApiError::UnexpectedStatus { status, body },
        Err(e) => ApiError::MalformedBody { status, reason: e.to_string() },
    }
}

/// Check the outcome of a create/update/delete call
pub fn expect_no_content(status: u16, body: &str) -> Result<(), ApiError> {
    if status == NO_CONTENT {
        Ok(())
    } else {
        Err(unexpected(status, body))
    }
}

/// Check and decode the outcome of the list call
pub fn decode_list(status: u16, body: &str) -> Result<Vec<Todo>, ApiError> {
    if status != OK {
        return Err(unexpected(status, body));
    }
    serde_json::from_str(body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_is_success() {
        assert!(expect_no_content(204, "").is_ok());
    }

    #[test]
    fn test_bad_request_keeps_json_body() {
        let err = expect_no_content(400, r#"{"error":"title required"}"#).unwrap_err();
        match err {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body["error"], "title required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_error_body_is_reported_not_raised() {
        let err = expect_no_content(500, "Internal Server Error").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody { status: 500, .. }));
    }

    #[test]
    fn test_ok_is_not_no_content() {
        // A mutating call must answer 204, a 200 with a body is still a failure
        let err = expect_no_content(200, r#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 200, .. }));
    }

    #[test]
    fn test_decode_list_in_response_order() {
        let body = r#"[{"id":2,"title":"b","completed":false},{"id":1,"title":"a","completed":true}]"#;
        let todos = decode_list(200, body).unwrap();
        let ids: Vec<_> = todos.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_decode_list_empty() {
        assert!(decode_list(200, "[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_list_non_ok_status() {
        let err = decode_list(503, r#"{"error":"down"}"#).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 503, .. }));
    }

    #[test]
    fn test_decode_list_garbage() {
        let err = decode_list(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_display_includes_body() {
        let err = unexpected(404, r#"{"error":"not found"}"#);
        assert_eq!(err.to_string(), r#"server answered 404: {"error":"not found"}"#);
    }
}

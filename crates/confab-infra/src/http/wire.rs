//! Wire types for the chat backend's JSON protocol.
//!
//! The backend speaks camelCase JSON: `{"message": …, "sessionId": …}` in,
//! `{"response": …}` out. Extra response fields (the backend echoes the
//! session id) are ignored on parse.

use serde::{Deserialize, Serialize};

use confab_types::session::SessionId;

/// Body of `POST {base}/chat`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExchangeRequest<'a> {
    pub message: &'a str,
    pub session_id: &'a SessionId,
}

/// Successful response body of `POST {base}/chat`.
#[derive(Debug, Deserialize)]
pub(super) struct ExchangeResponse {
    pub response: String,
}

/// Body of `POST {base}/reset-chat`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResetRequest<'a> {
    pub session_id: &'a SessionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_request_field_names() {
        let session_id: SessionId = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff".parse().unwrap();
        let body = ExchangeRequest {
            message: "Hello",
            session_id: &session_id,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            "{\"message\":\"Hello\",\
             \"sessionId\":\"6f9619ff-8b86-4d01-b42d-00cf4fc964ff\"}"
        );
    }

    #[test]
    fn test_reset_request_field_names() {
        let session_id: SessionId = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff".parse().unwrap();
        let body = ResetRequest {
            session_id: &session_id,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            "{\"sessionId\":\"6f9619ff-8b86-4d01-b42d-00cf4fc964ff\"}"
        );
    }

    #[test]
    fn test_exchange_response_ignores_extra_fields() {
        let json = r#"{"response": "Hi!", "sessionId": "ignored"}"#;
        let parsed: ExchangeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response, "Hi!");
    }

    #[test]
    fn test_exchange_response_requires_response_field() {
        let json = r#"{"error": "Message is required"}"#;
        assert!(serde_json::from_str::<ExchangeResponse>(json).is_err());
    }
}

//! HttpChatBackend -- concrete [`ChatBackend`] implementation over reqwest.
//!
//! Speaks the backend's JSON protocol: `POST {base}/chat` for exchanges and
//! `POST {base}/reset-chat` for reset notifications. Every failure mode is
//! mapped to a [`BackendError`] variant so the controller can recover it.

use std::time::Duration;

use confab_core::chat::ChatBackend;
use confab_types::config::ChatConfig;
use confab_types::error::BackendError;
use confab_types::session::SessionId;

use super::wire::{ExchangeRequest, ExchangeResponse, ResetRequest};

/// HTTP transport for the chat backend protocol.
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Create a backend from configuration.
    ///
    /// The request deadline applies to the whole call, connect included;
    /// exceeding it surfaces as [`BackendError::Timeout`].
    pub fn new(config: &ChatConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

impl ChatBackend for HttpChatBackend {
    async fn exchange(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> Result<String, BackendError> {
        let body = ExchangeRequest {
            message,
            session_id,
        };

        let response = self
            .client
            .post(self.url("/chat"))
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ExchangeResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Deserialization(e.to_string()))?;

        Ok(parsed.response)
    }

    async fn reset(&self, session_id: &SessionId) -> Result<(), BackendError> {
        let body = ResetRequest { session_id };

        let response = self
            .client
            .post(self.url("/reset-chat"))
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Response body is ignored by design; only the status matters.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_backend() -> HttpChatBackend {
        HttpChatBackend::new(&ChatConfig::default())
    }

    #[test]
    fn test_url_building() {
        let backend = make_backend().with_base_url("http://localhost:8080/api");
        assert_eq!(backend.url("/chat"), "http://localhost:8080/api/chat");
        assert_eq!(
            backend.url("/reset-chat"),
            "http://localhost:8080/api/reset-chat"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let backend = make_backend().with_base_url("http://localhost:8080/api/");
        assert_eq!(backend.url("/chat"), "http://localhost:8080/api/chat");
    }

    #[test]
    fn test_default_base_url_from_config() {
        let backend = make_backend();
        assert_eq!(backend.url("/chat"), "http://127.0.0.1:5000/api/chat");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        let config = ChatConfig {
            request_timeout_secs: 2,
            ..ChatConfig::default()
        };
        // Port 9 (discard) on localhost is not listening.
        let backend = HttpChatBackend::new(&config).with_base_url("http://127.0.0.1:9/api");
        let session_id = SessionId::generate();

        let err = backend
            .exchange(&session_id, "Hello")
            .await
            .expect_err("exchange should fail");
        assert!(matches!(
            err,
            BackendError::Transport(_) | BackendError::Timeout
        ));

        let err = backend
            .reset(&session_id)
            .await
            .expect_err("reset should fail");
        assert!(matches!(
            err,
            BackendError::Transport(_) | BackendError::Timeout
        ));
    }
}

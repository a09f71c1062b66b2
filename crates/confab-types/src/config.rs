//! Configuration types for Confab.
//!
//! `ChatConfig` represents the client's `config.toml`: where the backend
//! lives, how long to wait for it, and the two canonical user-facing
//! messages (welcome and fallback).

use serde::{Deserialize, Serialize};

/// Client configuration for a chat session.
///
/// Loaded from `~/.confab/config.toml`. All fields have sensible defaults,
/// so an empty file (or no file at all) yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the backend API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request deadline in seconds for exchange and reset calls.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Assistant entry seeded into the transcript by a session reset.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,

    /// Assistant entry appended when an exchange fails.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_welcome_message() -> String {
    "Hi there! I'm your AI assistant. How can I help you today?".to_string()
}

fn default_fallback_message() -> String {
    "I'm sorry, but I'm having trouble connecting to my backend right now. \
     Please try again later."
        .to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            welcome_message: default_welcome_message(),
            fallback_message: default_fallback_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.welcome_message.starts_with("Hi there!"));
        assert!(config.fallback_message.contains("trouble connecting"));
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: ChatConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_with_values() {
        let toml_str = r#"
base_url = "https://example.test/api"
request_timeout_secs = 10
welcome_message = "Welcome back."
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "https://example.test/api");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.welcome_message, "Welcome back.");
        // Unset fields still default.
        assert!(config.fallback_message.contains("trouble connecting"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ChatConfig {
            base_url: "https://example.test/api".to_string(),
            request_timeout_secs: 5,
            welcome_message: "hello".to_string(),
            fallback_message: "sorry".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ChatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, "https://example.test/api");
        assert_eq!(parsed.request_timeout_secs, 5);
    }
}

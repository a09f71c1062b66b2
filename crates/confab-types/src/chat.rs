//! Transcript and exchange outcome types for Confab.
//!
//! These types model one chat session as seen from the client: the ordered
//! transcript of user/assistant entries and the outcome of a single send
//! operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of an entry in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(format!("invalid chat role: '{other}'")),
        }
    }
}

/// A single entry in a session transcript.
///
/// Entries are ordered by insertion; insertion order is chronological order
/// is display order. Roles are expected to alternate (one user entry, one
/// assistant entry per exchange) but nothing rejects a violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    /// Create a user entry stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create an assistant entry stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Outcome of a single send operation.
///
/// A send never fails from the caller's point of view: backend errors are
/// recovered into [`SendOutcome::Fallback`] with a user-safe notice, and
/// empty input is ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was empty after trimming; nothing was sent and the
    /// transcript is untouched.
    Ignored,
    /// The backend answered; the reply was appended to the transcript.
    Replied(String),
    /// The exchange failed; the fallback notice was appended instead.
    Fallback(String),
}

impl SendOutcome {
    /// The assistant-side text of this outcome, if an exchange happened.
    pub fn text(&self) -> Option<&str> {
        match self {
            SendOutcome::Ignored => None,
            SendOutcome::Replied(text) | SendOutcome::Fallback(text) => Some(text),
        }
    }

    /// Whether the exchange fell back to the connection-trouble notice.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SendOutcome::Fallback(_))
    }
}

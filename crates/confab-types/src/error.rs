use thiserror::Error;

/// Errors from backend exchange and reset calls.
///
/// All variants are recoverable: the controller converts any of them into
/// the fallback notice (for exchanges) or a logged warning (for reset
/// notifications). None of them escapes to library callers.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed reply payload: {0}")]
    Deserialization(String),
}

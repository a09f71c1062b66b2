//! ChatBackend trait definition.
//!
//! The network seam between the controller and the remote conversational
//! API. Follows the same RPITIT pattern as the rest of the workspace.

use confab_types::error::BackendError;
use confab_types::session::SessionId;

/// Trait for chat backend transports.
///
/// Implementations live in confab-infra (e.g., `HttpChatBackend`); tests
/// use in-memory stubs. Uses native async fn in traits (RPITIT, Rust 2024
/// edition). `Send + Sync` so controllers can be shared across tasks.
pub trait ChatBackend: Send + Sync {
    /// Send one message for the given session and return the reply text.
    fn exchange(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, BackendError>> + Send;

    /// Ask the backend to discard any context held for the given session.
    ///
    /// Best-effort: callers treat failure as non-fatal.
    fn reset(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;
}

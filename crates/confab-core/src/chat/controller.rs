//! Chat session controller.
//!
//! `ChatController` owns one logical session: the session identifier, the
//! ordered transcript, and the pending-request marker. It mediates the
//! "send message, receive reply" exchange against a [`ChatBackend`] and
//! recovers every backend failure into a user-safe fallback entry, so
//! callers never observe a raw error or a dangling unanswered message.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::{info, warn};

use confab_types::chat::{SendOutcome, TranscriptEntry};
use confab_types::config::ChatConfig;
use confab_types::session::SessionId;

use crate::chat::backend::ChatBackend;

/// Controls one chat session against a backend.
///
/// State is interiorly mutable so a single controller can be shared behind
/// `Arc` by several calling surfaces. Exchanges are serialized on an
/// internal gate: overlapping sends queue in arrival order, so replies
/// never interleave out of order and the pending marker stays coherent.
///
/// The session identifier is generated at construction and lives for the
/// lifetime of the controller; `reset_session` does not regenerate it.
pub struct ChatController<B: ChatBackend> {
    backend: B,
    session_id: SessionId,
    transcript: Mutex<Vec<TranscriptEntry>>,
    pending: AtomicBool,
    exchange_gate: tokio::sync::Mutex<()>,
    welcome_message: String,
    fallback_message: String,
}

/// Clears the pending marker when dropped, on every exit path.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<B: ChatBackend> ChatController<B> {
    /// Create a controller with a fresh session identifier and an empty
    /// transcript.
    pub fn new(backend: B, config: &ChatConfig) -> Self {
        let session_id = SessionId::generate();
        info!(session_id = %session_id, "chat session created");

        Self {
            backend,
            session_id,
            transcript: Mutex::new(Vec::new()),
            pending: AtomicBool::new(false),
            exchange_gate: tokio::sync::Mutex::new(()),
            welcome_message: config.welcome_message.clone(),
            fallback_message: config.fallback_message.clone(),
        }
    }

    /// The per-session correlation token sent with every exchange.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Snapshot of the transcript in display order.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.lock_transcript().clone()
    }

    /// Whether an exchange is currently awaiting its reply.
    pub fn pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Send one message and return the settled outcome.
    ///
    /// Input is trimmed; an empty result is ignored outright: no transcript
    /// mutation, no pending change, no network call. Otherwise the user
    /// entry is appended before the request starts, and exactly one
    /// assistant entry (reply or fallback) is appended after it settles.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let _gate = self.exchange_gate.lock().await;

        self.lock_transcript().push(TranscriptEntry::user(text));

        self.pending.store(true, Ordering::SeqCst);
        let pending = PendingGuard(&self.pending);
        let result = self.backend.exchange(&self.session_id, text).await;
        drop(pending);

        match result {
            Ok(reply) => {
                self.lock_transcript()
                    .push(TranscriptEntry::assistant(reply.clone()));
                info!(session_id = %self.session_id, "exchange completed");
                SendOutcome::Replied(reply)
            }
            Err(err) => {
                warn!(
                    session_id = %self.session_id,
                    error = %err,
                    "exchange failed, appending fallback"
                );
                self.lock_transcript()
                    .push(TranscriptEntry::assistant(self.fallback_message.clone()));
                SendOutcome::Fallback(self.fallback_message.clone())
            }
        }
    }

    /// Reset the session: replace the transcript with the welcome entry and
    /// notify the backend to discard its server-held context.
    ///
    /// The local clear always wins -- a failed notification is logged and
    /// otherwise ignored. The session identifier is unchanged.
    pub async fn reset_session(&self) {
        let _gate = self.exchange_gate.lock().await;

        {
            let mut transcript = self.lock_transcript();
            transcript.clear();
            transcript.push(TranscriptEntry::assistant(self.welcome_message.clone()));
        }
        info!(session_id = %self.session_id, "session reset");

        if let Err(err) = self.backend.reset(&self.session_id).await {
            warn!(
                session_id = %self.session_id,
                error = %err,
                "reset notification failed, local transcript already cleared"
            );
        }
    }

    fn lock_transcript(&self) -> std::sync::MutexGuard<'_, Vec<TranscriptEntry>> {
        self.transcript.lock().expect("transcript lock poisoned")
    }
}

//! Chat session controller and rendering logic for Confab.
//!
//! This crate defines the `ChatBackend` "port" that the infrastructure
//! layer implements, the `ChatController` that owns one session's state,
//! and the safe HTML rendering transform for reply text. It depends only
//! on `confab-types` -- never on `confab-infra` or any network crate.

pub mod chat;
pub mod render;

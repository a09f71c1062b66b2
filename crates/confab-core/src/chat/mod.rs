//! Chat session state and exchange orchestration for Confab.
//!
//! `backend` defines the port trait the infrastructure layer implements;
//! `controller` owns the session identifier, transcript, and pending
//! marker for one logical session.

pub mod backend;
pub mod controller;

pub use backend::ChatBackend;
pub use controller::ChatController;

//! Shared domain types for Confab.
//!
//! This crate contains the core domain types used across the Confab client:
//! session identifiers, transcript entries, exchange outcomes, backend
//! errors, and configuration.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod session;
